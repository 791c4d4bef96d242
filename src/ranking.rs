use crate::scoring::{ScoringInput, ScoringStrategy};
use crate::types::config::{MatchConfig, DEFAULT_HIGHLIGHT, DEFAULT_TOP_N};
use crate::types::major::Major;
use crate::types::report::{MatchResult, RankedMajors};
use crate::types::scoring::StrategyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingOptions {
    /// Length of the weighted list.
    pub top_n: usize,
    /// Leading entries shown prominently; heuristic lists keep the rest as
    /// a secondary list.
    pub highlight: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            highlight: DEFAULT_HIGHLIGHT,
        }
    }
}

impl RankingOptions {
    pub fn from_config(config: &MatchConfig) -> Self {
        Self {
            top_n: config.top_n(),
            highlight: config.highlight(),
        }
    }
}

/// Scores every major and orders them best first. Ties keep catalog order.
pub fn rank(
    strategy: &dyn ScoringStrategy,
    input: &ScoringInput<'_>,
    majors: &[Major],
    options: RankingOptions,
) -> RankedMajors {
    let mut results = majors
        .iter()
        .map(|major| strategy.score(input, major))
        .collect::<Vec<_>>();
    sort_descending(&mut results);

    let kind = strategy.kind();
    let mut ranked = RankedMajors {
        strategy: kind,
        highlight_count: options.highlight,
        results,
    };
    if kind == StrategyKind::Weighted {
        ranked.truncate(options.top_n);
    }
    tracing::debug!(
        strategy = %kind,
        scored = majors.len(),
        kept = ranked.results.len(),
        "catalog ranked"
    );
    ranked
}

pub fn sort_descending(results: &mut [MatchResult]) {
    // sort_by is stable
    results.sort_by(|a, b| b.score.cmp(&a.score));
}
