use super::{validate_user_id, ProfileStore, RecommendationStore, StoredProfile};
use crate::error::{MatchError, Result};
use crate::types::profile::{DnaProfile, PsychologyAnswers};
use crate::types::report::RecommendationRecord;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PROFILES_DIR: &str = "profiles";
const RECOMMENDATIONS_DIR: &str = "recommendations";

/// JSON-file store rooted at a data directory:
///
/// - `profiles/<user>.json`, overwritten on every save
/// - `recommendations/<user>/<stamp>-<record>.json`, one file per snapshot,
///   created exclusively and never touched again
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn profile_path(&self, user_id: &str) -> PathBuf {
        self.root.join(PROFILES_DIR).join(format!("{user_id}.json"))
    }

    fn recommendations_dir(&self, user_id: &str) -> PathBuf {
        self.root.join(RECOMMENDATIONS_DIR).join(user_id)
    }
}

impl ProfileStore for FsStore {
    fn get_dna_profile(&self, user_id: &str) -> Result<Option<StoredProfile>> {
        validate_user_id(user_id)?;
        let path = self.profile_path(user_id);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(MatchError::Io(error)),
        };
        let stored: StoredProfile = serde_json::from_str(&raw)?;
        Ok(Some(stored))
    }

    fn save_dna_profile(
        &self,
        user_id: &str,
        profile: &DnaProfile,
        answers: &PsychologyAnswers,
    ) -> Result<()> {
        validate_user_id(user_id)?;
        let path = self.profile_path(user_id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(MatchError::Io)?;
        }
        let stored = StoredProfile::new(user_id, profile, answers);
        let json = serde_json::to_string_pretty(&stored)?;
        fs::write(&path, json).map_err(MatchError::Io)?;
        tracing::info!(user_id, path = %path.display(), "dna profile saved");
        Ok(())
    }
}

impl RecommendationStore for FsStore {
    fn append_recommendation(&self, record: &RecommendationRecord) -> Result<String> {
        validate_user_id(&record.user_id)?;
        let dir = self.recommendations_dir(&record.user_id);
        fs::create_dir_all(&dir).map_err(MatchError::Io)?;

        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let path = dir.join(format!("{stamp}-{}.json", record.record_id));
        let json = serde_json::to_string_pretty(record)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(MatchError::Io)?;
        file.write_all(json.as_bytes()).map_err(MatchError::Io)?;
        file.flush().map_err(MatchError::Io)?;

        tracing::info!(
            user_id = %record.user_id,
            record_id = %record.record_id,
            path = %path.display(),
            "recommendation snapshot appended"
        );
        Ok(record.record_id.clone())
    }

    fn list_recommendations(&self, user_id: &str) -> Result<Vec<RecommendationRecord>> {
        validate_user_id(user_id)?;
        let dir = self.recommendations_dir(user_id);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths = snapshot_files(&dir);
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let raw = fs::read_to_string(&path).map_err(MatchError::Io)?;
            match serde_json::from_str::<RecommendationRecord>(&raw) {
                Ok(record) => records.push(record),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable snapshot");
                }
            }
        }
        Ok(records)
    }
}

fn snapshot_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect()
}
