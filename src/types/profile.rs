use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Sentinel used when a skill bucket ends up empty.
pub const EMPTY_BUCKET: &str = "Perlu digali lebih lanjut";
/// Sentinel for a dimension whose answers are all zero or missing.
pub const NO_DOMINANT: &str = "-";
/// Sentinel for a dimension where every slot ties for the maximum.
pub const ALL_ROUNDER: &str = "Seimbang / All-Rounder";

/// Likert answers keyed by question number.
///
/// Lookups never fail: a missing question, or a value outside the Likert
/// range, reads as 0. Deserialization is equally lenient: numeric strings
/// are accepted, any other unusable value reads as 0, and keys that are not
/// question numbers are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PsychologyAnswers(BTreeMap<u8, u8>);

impl<'de> Deserialize<'de> for PsychologyAnswers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = match Value::deserialize(deserializer)? {
            Value::Object(entries) => entries,
            Value::Null => return Ok(Self::default()),
            _ => {
                tracing::warn!("psychology answers are not an object; reading all as 0");
                return Ok(Self::default());
            }
        };

        let mut answers = BTreeMap::new();
        for (key, value) in entries {
            let Ok(question) = key.trim().parse::<u8>() else {
                tracing::debug!(key = %key, "ignoring non-numeric question key");
                continue;
            };
            answers.insert(question, likert_value(&value));
        }
        Ok(Self(answers))
    }
}

fn likert_value(value: &Value) -> u8 {
    let parsed = match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    };
    match parsed {
        Some(answer) if (u64::from(LIKERT_MIN)..=u64::from(LIKERT_MAX)).contains(&answer) => {
            answer as u8
        }
        _ => 0,
    }
}

/// Reads `null` as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PsychologyAnswers {
    #[cfg(test)]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    pub fn get(&self, question: u8) -> u8 {
        match self.0.get(&question) {
            Some(value) if (LIKERT_MIN..=LIKERT_MAX).contains(value) => *value,
            _ => 0,
        }
    }
}

/// Raw questionnaire submission, exactly as the student filled it in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessment {
    #[serde(alias = "rawSkills", deserialize_with = "null_as_empty")]
    pub raw_skills: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub experiences: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub interest: String,
    #[serde(alias = "psychologyAnswers")]
    pub answers: PsychologyAnswers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBuckets {
    pub strong: String,
    pub medium: String,
    pub weak: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaSkill {
    pub raw_skills: String,
    pub experiences: String,
    pub interest: String,
    pub skill_strong: String,
    pub skill_medium: String,
    pub skill_weak: String,
}

impl DnaSkill {
    pub fn new(raw_skills: &str, experiences: &str, interest: &str, buckets: SkillBuckets) -> Self {
        Self {
            raw_skills: raw_skills.to_string(),
            experiences: experiences.to_string(),
            interest: interest.to_string(),
            skill_strong: buckets.strong,
            skill_medium: buckets.medium,
            skill_weak: buckets.weak,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaPsychology {
    pub cognitive: String,
    pub learning: String,
    pub motivation: String,
    #[serde(rename = "trait")]
    pub temperament: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaProfile {
    pub skill: DnaSkill,
    pub psychology: DnaPsychology,
}
