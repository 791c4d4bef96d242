use crate::error::MatchError;
use crate::types::scoring::StrategyKind;
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_HIGHLIGHT: usize = 3;
pub const DEFAULT_DATA_DIR: &str = ".majormatch";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchConfig {
    pub scoring: Option<ScoringConfig>,
    pub store: Option<StoreConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_strategy")]
    pub strategy: String,
    pub top_n: Option<usize>,
    pub highlight: Option<usize>,
    pub weights: Option<HashMap<String, f64>>,
}

fn default_strategy() -> String {
    "weighted".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub data_dir: Option<String>,
    pub catalog: Option<String>,
}

/// Maximum points each weighted component may contribute. Sums to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentWeights {
    pub cognitive: f64,
    pub learning: f64,
    pub motivation: f64,
    pub skills: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            cognitive: 30.0,
            learning: 20.0,
            motivation: 30.0,
            skills: 20.0,
        }
    }
}

impl ComponentWeights {
    pub fn as_array(&self) -> [f64; 4] {
        [self.cognitive, self.learning, self.motivation, self.skills]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

impl MatchConfig {
    pub fn weights(&self) -> ComponentWeights {
        let defaults = ComponentWeights::default();
        match self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.weights.as_ref())
        {
            Some(weights) => ComponentWeights {
                cognitive: *weights.get("cognitive").unwrap_or(&defaults.cognitive),
                learning: *weights.get("learning").unwrap_or(&defaults.learning),
                motivation: *weights.get("motivation").unwrap_or(&defaults.motivation),
                skills: *weights.get("skills").unwrap_or(&defaults.skills),
            },
            None => defaults,
        }
    }

    pub fn strategy(&self) -> StrategyKind {
        match self.scoring.as_ref().map(|scoring| scoring.strategy.as_str()) {
            Some("heuristic") => StrategyKind::Heuristic,
            _ => StrategyKind::Weighted,
        }
    }

    pub fn top_n(&self) -> usize {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.top_n)
            .unwrap_or(DEFAULT_TOP_N)
    }

    pub fn highlight(&self) -> usize {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.highlight)
            .unwrap_or(DEFAULT_HIGHLIGHT)
    }

    pub fn data_dir(&self) -> &str {
        self.store
            .as_ref()
            .and_then(|store| store.data_dir.as_deref())
            .unwrap_or(DEFAULT_DATA_DIR)
    }

    pub fn catalog_path(&self) -> Option<&str> {
        self.store
            .as_ref()
            .and_then(|store| store.catalog.as_deref())
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if let Some(scoring) = &self.scoring {
            if !matches!(scoring.strategy.as_str(), "weighted" | "heuristic") {
                return Err(MatchError::ConfigParse(format!(
                    "unsupported scoring.strategy: {}",
                    scoring.strategy
                )));
            }
            if scoring.top_n == Some(0) {
                return Err(MatchError::ConfigParse(
                    "scoring.top_n must be greater than 0".to_string(),
                ));
            }
            if scoring.highlight == Some(0) {
                return Err(MatchError::ConfigParse(
                    "scoring.highlight must be greater than 0".to_string(),
                ));
            }

            if let Some(weights) = &scoring.weights {
                const ALLOWED_WEIGHT_KEYS: [&str; 4] =
                    ["cognitive", "learning", "motivation", "skills"];
                let mut unknown = weights
                    .keys()
                    .filter(|key| !ALLOWED_WEIGHT_KEYS.contains(&key.as_str()))
                    .cloned()
                    .collect::<Vec<_>>();
                if !unknown.is_empty() {
                    unknown.sort();
                    return Err(MatchError::ConfigParse(format!(
                        "scoring.weights contains unknown key(s): {}",
                        unknown.join(", ")
                    )));
                }
            }
        }

        let weights = self.weights();
        if weights
            .as_array()
            .iter()
            .any(|weight| !(0.0..=100.0).contains(weight))
        {
            return Err(MatchError::ConfigParse(
                "scoring.weights values must be between 0 and 100".to_string(),
            ));
        }
        let weight_sum = weights.sum();
        if (weight_sum - 100.0).abs() > 0.001 {
            return Err(MatchError::ConfigParse(format!(
                "scoring.weights must sum to 100 (found {:.3})",
                weight_sum
            )));
        }

        if let Some(data_dir) = self.store.as_ref().and_then(|store| store.data_dir.as_ref()) {
            if data_dir.trim().is_empty() {
                return Err(MatchError::ConfigParse(
                    "store.data_dir must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
