use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Weighted,
    Heuristic,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weighted => "weighted",
            Self::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-component contributions of the weighted scorer, each already scaled
/// to its own weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub cognitive: Score,
    pub learning: Score,
    pub motivation: Score,
    pub skills: Score,
}

impl ComponentScores {
    pub fn raw_total(&self) -> Score {
        self.cognitive + self.learning + self.motivation + self.skills
    }

    /// Rounded and clamped into the public 0..=100 range.
    pub fn finalize(&self) -> u8 {
        self.raw_total().round().clamp(0.0, 100.0) as u8
    }
}
