use crate::types::scoring::{ComponentScores, StrategyKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub major_id: String,
    pub major_name: String,
    pub score: u8,
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentScores>,
}

/// Scores for the whole catalog, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMajors {
    pub strategy: StrategyKind,
    pub highlight_count: usize,
    pub results: Vec<MatchResult>,
}

impl RankedMajors {
    pub fn top(&self, n: usize) -> &[MatchResult] {
        &self.results[..n.min(self.results.len())]
    }

    pub fn highlight(&self) -> &[MatchResult] {
        self.top(self.highlight_count)
    }

    pub fn remainder(&self) -> &[MatchResult] {
        &self.results[self.highlight().len()..]
    }

    /// Keep only the first `n` results.
    pub fn truncate(&mut self, n: usize) {
        self.results.truncate(n);
    }
}

/// Immutable snapshot of one recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub record_id: String,
    pub user_id: String,
    pub strategy: StrategyKind,
    pub created_at: String,
    pub results: Vec<MatchResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorExplanation {
    #[serde(alias = "majorName")]
    pub major_name: String,
    pub explanation: String,
    #[serde(default, alias = "keyStrengths")]
    pub key_strengths: Vec<String>,
    #[serde(default, alias = "growthAreas")]
    pub growth_areas: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, score: u8) -> MatchResult {
        MatchResult {
            major_id: id.to_string(),
            major_name: id.to_uppercase(),
            score,
            reasons: vec!["reason".to_string()],
            components: None,
        }
    }

    #[test]
    fn highlight_and_remainder_partition_results() {
        let ranked = RankedMajors {
            strategy: StrategyKind::Heuristic,
            highlight_count: 3,
            results: vec![
                result("a", 90),
                result("b", 80),
                result("c", 70),
                result("d", 60),
                result("e", 50),
            ],
        };
        let highlighted = ranked
            .highlight()
            .iter()
            .map(|r| r.major_id.as_str())
            .collect::<Vec<_>>();
        let rest = ranked
            .remainder()
            .iter()
            .map(|r| r.major_id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(highlighted, vec!["a", "b", "c"]);
        assert_eq!(rest, vec!["d", "e"]);
    }

    #[test]
    fn top_and_highlight_tolerate_short_lists() {
        let ranked = RankedMajors {
            strategy: StrategyKind::Weighted,
            highlight_count: 3,
            results: vec![result("a", 10)],
        };
        assert_eq!(ranked.top(10).len(), 1);
        assert_eq!(ranked.highlight().len(), 1);
        assert!(ranked.remainder().is_empty());
    }

    #[test]
    fn explanation_accepts_camel_case_fields() {
        let parsed: MajorExplanation = serde_json::from_str(
            r#"{"majorName": "Psikologi", "explanation": "cocok", "keyStrengths": ["empati"]}"#,
        )
        .expect("explanation should parse");
        assert_eq!(parsed.major_name, "Psikologi");
        assert_eq!(parsed.key_strengths, vec!["empati".to_string()]);
        assert!(parsed.growth_areas.is_empty());
    }
}
