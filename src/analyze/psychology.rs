use crate::rules::{Dimension, DimensionRule, PSYCHOLOGY_DIMENSIONS};
use crate::types::profile::{DnaPsychology, PsychologyAnswers, ALL_ROUNDER, NO_DOMINANT};

pub fn analyze_psychology(answers: &PsychologyAnswers) -> DnaPsychology {
    analyze_psychology_with(PSYCHOLOGY_DIMENSIONS, answers)
}

pub fn analyze_psychology_with(rules: &[DimensionRule], answers: &PsychologyAnswers) -> DnaPsychology {
    let mut psychology = DnaPsychology {
        cognitive: NO_DOMINANT.to_string(),
        learning: NO_DOMINANT.to_string(),
        motivation: NO_DOMINANT.to_string(),
        temperament: NO_DOMINANT.to_string(),
    };

    for rule in rules {
        let label = dominant_label(rule, answers);
        match rule.dimension {
            Dimension::Cognitive => psychology.cognitive = label,
            Dimension::Learning => psychology.learning = label,
            Dimension::Motivation => psychology.motivation = label,
            Dimension::Temperament => psychology.temperament = label,
        }
    }

    psychology
}

/// Every label sharing the top score is reported; ties are never broken.
pub fn dominant_label(rule: &DimensionRule, answers: &PsychologyAnswers) -> String {
    let scored = rule
        .slots
        .iter()
        .map(|(question, label)| (answers.get(*question), *label))
        .collect::<Vec<_>>();

    let max = scored.iter().map(|(score, _)| *score).max().unwrap_or(0);
    if max == 0 {
        return NO_DOMINANT.to_string();
    }

    let tied = scored
        .iter()
        .filter(|(score, _)| *score == max)
        .map(|(_, label)| *label)
        .collect::<Vec<_>>();

    if tied.len() == rule.slots.len() {
        ALL_ROUNDER.to_string()
    } else {
        tied.join(" & ")
    }
}
