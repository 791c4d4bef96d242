//! Boundaries to the catalog, profile, and recommendation stores.

pub mod fs;
#[cfg(test)]
pub mod memory;

use crate::error::{MatchError, Result};
use crate::types::major::Major;
use crate::types::profile::{Assessment, DnaProfile, DnaPsychology, DnaSkill, PsychologyAnswers};
use crate::types::report::{MatchResult, RecommendationRecord};
use crate::types::scoring::StrategyKind;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

const MAX_USER_ID_LEN: usize = 128;
const RECORD_ID_LEN: usize = 16;

pub trait CatalogProvider {
    fn list_majors(&self) -> Result<Vec<Major>>;

    fn get_major(&self, id: &str) -> Result<Option<Major>> {
        Ok(self.list_majors()?.into_iter().find(|major| major.id == id))
    }
}

pub trait ProfileStore {
    fn get_dna_profile(&self, user_id: &str) -> Result<Option<StoredProfile>>;

    /// Replaces whatever was stored for the user.
    fn save_dna_profile(
        &self,
        user_id: &str,
        profile: &DnaProfile,
        answers: &PsychologyAnswers,
    ) -> Result<()>;
}

/// Append-only. Records are never rewritten once stored.
pub trait RecommendationStore {
    fn append_recommendation(&self, record: &RecommendationRecord) -> Result<String>;
    fn list_recommendations(&self, user_id: &str) -> Result<Vec<RecommendationRecord>>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub user_id: String,
    #[serde(default)]
    pub skill: Option<DnaSkill>,
    #[serde(default)]
    pub psychology: Option<DnaPsychology>,
    #[serde(default)]
    pub answers: PsychologyAnswers,
    pub updated_at: String,
}

impl StoredProfile {
    pub fn new(user_id: &str, profile: &DnaProfile, answers: &PsychologyAnswers) -> Self {
        Self {
            user_id: user_id.to_string(),
            skill: Some(profile.skill.clone()),
            psychology: Some(profile.psychology.clone()),
            answers: answers.clone(),
            updated_at: Utc::now().to_rfc3339(),
        }
    }

    /// Both halves must be present before any scoring happens.
    pub fn require_complete(&self) -> Result<(Assessment, DnaProfile)> {
        let (Some(skill), Some(psychology)) = (&self.skill, &self.psychology) else {
            return Err(MatchError::ProfileIncomplete(self.user_id.clone()));
        };
        let assessment = Assessment {
            raw_skills: skill.raw_skills.clone(),
            experiences: skill.experiences.clone(),
            interest: skill.interest.clone(),
            answers: self.answers.clone(),
        };
        let profile = DnaProfile {
            skill: skill.clone(),
            psychology: psychology.clone(),
        };
        Ok((assessment, profile))
    }
}

/// Loads the user's profile or fails with the precondition error.
pub fn load_complete_profile(
    store: &dyn ProfileStore,
    user_id: &str,
) -> Result<(Assessment, DnaProfile)> {
    store
        .get_dna_profile(user_id)?
        .ok_or_else(|| MatchError::ProfileIncomplete(user_id.to_string()))?
        .require_complete()
}

pub fn new_record(
    user_id: &str,
    strategy: StrategyKind,
    results: &[MatchResult],
) -> Result<RecommendationRecord> {
    let created_at = Utc::now().to_rfc3339();
    let payload = serde_json::to_vec(results)?;
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    hasher.update(created_at.as_bytes());
    hasher.update(strategy.as_str().as_bytes());
    hasher.update(&payload);
    let digest = format!("{:x}", hasher.finalize());

    Ok(RecommendationRecord {
        record_id: digest[..RECORD_ID_LEN].to_string(),
        user_id: user_id.to_string(),
        strategy,
        created_at,
        results: results.to_vec(),
    })
}

/// User ids double as file names, so only a conservative character set is
/// accepted.
pub fn validate_user_id(user_id: &str) -> Result<()> {
    let valid = !user_id.is_empty()
        && user_id.len() <= MAX_USER_ID_LEN
        && !user_id.starts_with('.')
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@'));
    if valid {
        Ok(())
    } else {
        Err(MatchError::InvalidUserId(user_id.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct StaticCatalog {
    majors: Vec<Major>,
}

impl StaticCatalog {
    pub fn new(majors: Vec<Major>) -> Self {
        Self { majors }
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_majors(&self) -> Result<Vec<Major>> {
        Ok(self.majors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn profile() -> DnaProfile {
        DnaProfile {
            skill: DnaSkill {
                raw_skills: "coding".to_string(),
                skill_strong: "Programming".to_string(),
                ..DnaSkill::default()
            },
            psychology: DnaPsychology::default(),
        }
    }

    #[test]
    fn require_complete_rejects_missing_half() {
        let mut stored = StoredProfile::new("u1", &profile(), &PsychologyAnswers::default());
        stored.psychology = None;
        let err = stored.require_complete().expect_err("incomplete profile should fail");
        assert!(err.is_precondition());
    }

    #[test]
    fn require_complete_rebuilds_assessment() {
        let answers = PsychologyAnswers::from_pairs([(1, 4)]);
        let stored = StoredProfile::new("u1", &profile(), &answers);
        let (assessment, dna) = stored.require_complete().expect("profile should be complete");
        assert_eq!(assessment.raw_skills, "coding");
        assert_eq!(assessment.answers.get(1), 4);
        assert_eq!(dna.skill.skill_strong, "Programming");
    }

    #[test]
    fn stored_profile_without_halves_deserializes_as_incomplete() {
        let stored: StoredProfile =
            serde_json::from_str(r#"{"user_id": "u9", "updated_at": "2026-01-01T00:00:00Z"}"#)
                .expect("partial record should parse");
        assert!(stored.require_complete().is_err());
    }

    #[test]
    fn record_ids_are_short_hex_digests() {
        let record = new_record("u1", StrategyKind::Weighted, &[]).expect("record should build");
        assert_eq!(record.record_id.len(), RECORD_ID_LEN);
        assert!(record.record_id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn user_id_validation_rejects_path_like_ids() {
        assert!(validate_user_id("siswa-01").is_ok());
        assert!(validate_user_id("ana@example.com").is_ok());
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id("../etc").is_err());
        assert!(validate_user_id("a/b").is_err());
        assert!(validate_user_id(".hidden").is_err());
    }

    #[test]
    fn static_catalog_finds_major_by_id() {
        let provider = StaticCatalog::new(catalog::seed_catalog().expect("seed should load"));
        let found = provider
            .get_major("psikologi")
            .expect("lookup should succeed")
            .expect("major should exist");
        assert_eq!(found.name, "Psikologi");
        assert!(provider
            .get_major("astronomi")
            .expect("lookup should succeed")
            .is_none());
    }
}
