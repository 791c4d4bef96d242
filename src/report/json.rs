use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{MatchResult, RankedMajors};
    use crate::types::scoring::{ComponentScores, StrategyKind};

    #[test]
    fn json_ranked_list_contains_scores_and_strategy() {
        let ranked = RankedMajors {
            strategy: StrategyKind::Weighted,
            highlight_count: 3,
            results: vec![MatchResult {
                major_id: "statistika".to_string(),
                major_name: "Statistika".to_string(),
                score: 72,
                reasons: vec!["Kesesuaian gaya belajar 12/20".to_string()],
                components: Some(ComponentScores::default()),
            }],
        };

        let rendered = to_json(&ranked).expect("json should serialize");
        assert!(rendered.contains("\"strategy\": \"weighted\""));
        assert!(rendered.contains("\"score\": 72"));
        assert!(rendered.contains("\"components\""));
    }

    #[test]
    fn json_omits_absent_components() {
        let result = MatchResult {
            major_id: "psikologi".to_string(),
            major_name: "Psikologi".to_string(),
            score: 45,
            reasons: vec!["x".to_string()],
            components: None,
        };
        let rendered = to_json(&result).expect("json should serialize");
        assert!(!rendered.contains("components"));
    }
}
