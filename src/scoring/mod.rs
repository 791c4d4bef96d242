pub mod heuristic;
pub mod weighted;

use crate::types::config::ComponentWeights;
use crate::types::major::Major;
use crate::types::profile::{Assessment, DnaProfile};
use crate::types::report::MatchResult;
use crate::types::scoring::StrategyKind;

/// Everything a strategy may look at for one user: the raw submission and
/// the labelled profile derived from it.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub assessment: &'a Assessment,
    pub dna: &'a DnaProfile,
}

/// A compatibility algorithm. Implementations are pure and hold no
/// per-request state, so one instance can score concurrently.
pub trait ScoringStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;
    fn score(&self, input: &ScoringInput<'_>, major: &Major) -> MatchResult;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedTraitStrategy {
    pub weights: ComponentWeights,
}

impl ScoringStrategy for WeightedTraitStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Weighted
    }

    fn score(&self, input: &ScoringInput<'_>, major: &Major) -> MatchResult {
        let outcome = weighted::calculate_compatibility(input.assessment, major, &self.weights);
        MatchResult {
            major_id: major.id.clone(),
            major_name: major.name.clone(),
            score: outcome.score,
            reasons: outcome.reasons,
            components: Some(outcome.components),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl ScoringStrategy for HeuristicStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Heuristic
    }

    fn score(&self, input: &ScoringInput<'_>, major: &Major) -> MatchResult {
        let outcome = heuristic::calculate_match_score(input.dna, major);
        MatchResult {
            major_id: major.id.clone(),
            major_name: major.name.clone(),
            score: outcome.score,
            reasons: outcome.reasons,
            components: None,
        }
    }
}

pub fn strategy_for(kind: StrategyKind, weights: ComponentWeights) -> Box<dyn ScoringStrategy> {
    match kind {
        StrategyKind::Weighted => Box::new(WeightedTraitStrategy { weights }),
        StrategyKind::Heuristic => Box::new(HeuristicStrategy),
    }
}
