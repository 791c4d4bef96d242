use crate::error::{MatchError, Result};
use crate::types::major::{Major, MajorRecord};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

const SEED_CATALOG: &str = include_str!("../data/majors.json");

/// The catalog shipped with the binary.
pub fn seed_catalog() -> Result<Vec<Major>> {
    parse_catalog(SEED_CATALOG)
}

pub fn load_catalog(path: &Path) -> Result<Vec<Major>> {
    if !path.exists() {
        return Err(MatchError::PathNotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    let majors = parse_catalog(&raw)?;
    tracing::info!(path = %path.display(), count = majors.len(), "catalog loaded");
    Ok(majors)
}

/// Parses a JSON array of catalog rows. A row that cannot be read is skipped
/// with a warning; the rest of the catalog still loads.
pub fn parse_catalog(raw: &str) -> Result<Vec<Major>> {
    let rows: Vec<Value> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    let mut majors = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        let record: MajorRecord = match serde_json::from_value(row) {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(index, %error, "skipping unreadable catalog row");
                continue;
            }
        };
        if !seen.insert(record.id.clone()) {
            tracing::warn!(major_id = %record.id, "duplicate major id; keeping first entry");
            continue;
        }
        majors.push(Major::from_record(record));
    }

    Ok(majors)
}
