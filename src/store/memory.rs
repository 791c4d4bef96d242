use super::{validate_user_id, ProfileStore, RecommendationStore, StoredProfile};
use crate::error::Result;
use crate::types::profile::{DnaProfile, PsychologyAnswers};
use crate::types::report::RecommendationRecord;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local store backing the unit tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: Mutex<HashMap<String, StoredProfile>>,
    recommendations: Mutex<Vec<RecommendationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl ProfileStore for MemoryStore {
    fn get_dna_profile(&self, user_id: &str) -> Result<Option<StoredProfile>> {
        Ok(lock(&self.profiles).get(user_id).cloned())
    }

    fn save_dna_profile(
        &self,
        user_id: &str,
        profile: &DnaProfile,
        answers: &PsychologyAnswers,
    ) -> Result<()> {
        validate_user_id(user_id)?;
        lock(&self.profiles).insert(
            user_id.to_string(),
            StoredProfile::new(user_id, profile, answers),
        );
        Ok(())
    }
}

impl RecommendationStore for MemoryStore {
    fn append_recommendation(&self, record: &RecommendationRecord) -> Result<String> {
        validate_user_id(&record.user_id)?;
        lock(&self.recommendations).push(record.clone());
        Ok(record.record_id.clone())
    }

    fn list_recommendations(&self, user_id: &str) -> Result<Vec<RecommendationRecord>> {
        Ok(lock(&self.recommendations)
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze;
    use crate::store::{load_complete_profile, new_record};
    use crate::types::profile::Assessment;
    use crate::types::scoring::StrategyKind;

    #[test]
    fn save_overwrites_previous_profile() {
        let store = MemoryStore::new();
        let first = Assessment {
            raw_skills: "coding".to_string(),
            ..Assessment::default()
        };
        let second = Assessment {
            raw_skills: "desain".to_string(),
            ..Assessment::default()
        };
        store
            .save_dna_profile("u1", &analyze::analyze(&first), &first.answers)
            .expect("first save should succeed");
        store
            .save_dna_profile("u1", &analyze::analyze(&second), &second.answers)
            .expect("second save should succeed");

        let (assessment, dna) =
            load_complete_profile(&store, "u1").expect("profile should be complete");
        assert_eq!(assessment.raw_skills, "desain");
        assert_eq!(dna.skill.skill_strong, "Desain");
    }

    #[test]
    fn missing_profile_is_a_precondition_error() {
        let store = MemoryStore::new();
        let err = load_complete_profile(&store, "ghost").expect_err("absent profile should fail");
        assert!(err.is_precondition());
    }

    #[test]
    fn recommendations_accumulate_per_user() {
        let store = MemoryStore::new();
        for user in ["u1", "u2", "u1"] {
            let record = new_record(user, StrategyKind::Heuristic, &[]).expect("record should build");
            store
                .append_recommendation(&record)
                .expect("append should succeed");
        }
        assert_eq!(store.list_recommendations("u1").expect("list").len(), 2);
        assert_eq!(store.list_recommendations("u2").expect("list").len(), 1);
    }
}
