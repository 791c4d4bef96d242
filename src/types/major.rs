use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const MAX_TRAIT_WEIGHT: u8 = 5;

/// Numeric weights a major declares for the RIASEC and learning-style
/// dimensions. Every weight lies in `0..=MAX_TRAIT_WEIGHT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitVector {
    pub investigative: u8,
    pub realistic: u8,
    pub conventional: u8,
    pub artistic: u8,
    pub social: u8,
    pub enterprising: u8,
    pub visual: u8,
    pub auditory: u8,
    pub kinesthetic: u8,
}

impl TraitVector {
    pub fn from_metadata(metadata: &MajorMetadata) -> Self {
        let weight = |map: &BTreeMap<String, i64>, key: &str| -> u8 {
            map.get(key)
                .copied()
                .unwrap_or(0)
                .clamp(0, i64::from(MAX_TRAIT_WEIGHT)) as u8
        };
        Self {
            investigative: weight(&metadata.traits, "investigative"),
            realistic: weight(&metadata.traits, "realistic"),
            conventional: weight(&metadata.traits, "conventional"),
            artistic: weight(&metadata.traits, "artistic"),
            social: weight(&metadata.traits, "social"),
            enterprising: weight(&metadata.traits, "enterprising"),
            visual: weight(&metadata.learning, "visual"),
            auditory: weight(&metadata.learning, "auditory"),
            kinesthetic: weight(&metadata.learning, "kinesthetic"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MajorMetadata {
    #[serde(default)]
    pub traits: BTreeMap<String, i64>,
    #[serde(default)]
    pub learning: BTreeMap<String, i64>,
}

/// Catalog row as stored. `metadata` is either a JSON object or a JSON
/// document serialized into a string.
#[derive(Debug, Clone, Deserialize)]
pub struct MajorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prospects: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub traits: String,
    #[serde(default)]
    pub mk: String,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Read-only catalog entry with its metadata already resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Major {
    pub id: String,
    pub name: String,
    pub university: String,
    pub category: String,
    pub description: String,
    pub prospects: String,
    pub skills: String,
    pub traits: String,
    pub mk: String,
    pub weights: TraitVector,
}

impl Major {
    pub fn from_record(record: MajorRecord) -> Self {
        let weights = match resolve_metadata(record.metadata.as_ref()) {
            Ok(Some(metadata)) => TraitVector::from_metadata(&metadata),
            Ok(None) => TraitVector::default(),
            Err(reason) => {
                tracing::warn!(
                    major_id = %record.id,
                    %reason,
                    "malformed major metadata; scoring with empty trait vector"
                );
                TraitVector::default()
            }
        };

        Self {
            id: record.id,
            name: record.name,
            university: record.university,
            category: record.category,
            description: record.description,
            prospects: record.prospects,
            skills: record.skills,
            traits: record.traits,
            mk: record.mk,
            weights,
        }
    }

    /// Foundational course topics, in catalog order.
    pub fn course_topics(&self) -> Vec<&str> {
        self.mk
            .split(',')
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .collect()
    }
}

fn resolve_metadata(value: Option<&Value>) -> Result<Option<MajorMetadata>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) if raw.trim().is_empty() => Ok(None),
        Some(Value::String(raw)) => serde_json::from_str(raw)
            .map(Some)
            .map_err(|e| e.to_string()),
        Some(object @ Value::Object(_)) => serde_json::from_value(object.clone())
            .map(Some)
            .map_err(|e| e.to_string()),
        Some(other) => Err(format!("unexpected metadata type: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(metadata: Option<Value>) -> MajorRecord {
        MajorRecord {
            id: "m1".to_string(),
            name: "Teknik Informatika".to_string(),
            university: String::new(),
            category: String::new(),
            description: String::new(),
            prospects: String::new(),
            skills: "coding, algoritma".to_string(),
            traits: "logis, teknis".to_string(),
            mk: "Algoritma, , Struktur Data".to_string(),
            metadata,
        }
    }

    #[test]
    fn metadata_object_resolves_weights_and_defaults_missing_dimensions() {
        let major = Major::from_record(record(Some(serde_json::json!({
            "traits": { "investigative": 5, "conventional": 3 },
            "learning": { "visual": 4 }
        }))));
        assert_eq!(major.weights.investigative, 5);
        assert_eq!(major.weights.conventional, 3);
        assert_eq!(major.weights.visual, 4);
        assert_eq!(major.weights.social, 0);
        assert_eq!(major.weights.kinesthetic, 0);
    }

    #[test]
    fn metadata_encoded_as_string_is_parsed() {
        let major = Major::from_record(record(Some(Value::String(
            r#"{"traits": {"artistic": 4}, "learning": {"auditory": 2}}"#.to_string(),
        ))));
        assert_eq!(major.weights.artistic, 4);
        assert_eq!(major.weights.auditory, 2);
    }

    #[test]
    fn malformed_metadata_falls_back_to_zero_vector() {
        let major = Major::from_record(record(Some(Value::String("{not json".to_string()))));
        assert_eq!(major.weights, TraitVector::default());

        let major = Major::from_record(record(Some(serde_json::json!([1, 2, 3]))));
        assert_eq!(major.weights, TraitVector::default());
    }

    #[test]
    fn out_of_range_weights_are_clamped() {
        let major = Major::from_record(record(Some(serde_json::json!({
            "traits": { "social": 9, "realistic": -2 }
        }))));
        assert_eq!(major.weights.social, MAX_TRAIT_WEIGHT);
        assert_eq!(major.weights.realistic, 0);
    }

    #[test]
    fn course_topics_skip_blank_entries() {
        let major = Major::from_record(record(None));
        assert_eq!(major.course_topics(), vec!["Algoritma", "Struktur Data"]);
    }
}
