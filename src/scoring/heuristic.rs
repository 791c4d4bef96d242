use crate::rules::{
    Condition, HeuristicRule, ProfileField, HEURISTIC_BASE_SCORE, HEURISTIC_DEFAULT_REASON,
    HEURISTIC_MAX_SCORE, HEURISTIC_RULES,
};
use crate::text::contains_any;
use crate::types::major::Major;
use crate::types::profile::DnaProfile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicOutcome {
    pub score: u8,
    pub reasons: Vec<String>,
}

pub fn calculate_match_score(dna: &DnaProfile, major: &Major) -> HeuristicOutcome {
    calculate_match_score_with(HEURISTIC_RULES, dna, major)
}

pub fn calculate_match_score_with(
    rules: &[HeuristicRule],
    dna: &DnaProfile,
    major: &Major,
) -> HeuristicOutcome {
    let mut bonus: u32 = 0;
    let mut reasons = Vec::new();

    for rule in rules {
        if evaluate(&rule.condition, dna, major) {
            tracing::trace!(rule = rule.id, major_id = %major.id, "heuristic rule matched");
            bonus += rule.points;
            reasons.push(rule.reason.to_string());
        }
    }

    if reasons.is_empty() {
        reasons.push(HEURISTIC_DEFAULT_REASON.to_string());
    }

    let score = (bonus + HEURISTIC_BASE_SCORE).min(HEURISTIC_MAX_SCORE) as u8;
    HeuristicOutcome { score, reasons }
}

fn evaluate(condition: &Condition, dna: &DnaProfile, major: &Major) -> bool {
    match condition {
        Condition::All(parts) => parts.iter().all(|part| evaluate(part, dna, major)),
        Condition::Any(parts) => parts.iter().any(|part| evaluate(part, dna, major)),
        Condition::MajorTraits(keywords) => contains_any(&major.traits, keywords),
        Condition::MajorName(keywords) => contains_any(&major.name, keywords),
        Condition::Profile(field, keywords) => contains_any(profile_text(*field, dna), keywords),
    }
}

fn profile_text(field: ProfileField, dna: &DnaProfile) -> &str {
    match field {
        ProfileField::SkillStrong => &dna.skill.skill_strong,
        ProfileField::Interest => &dna.skill.interest,
        ProfileField::Cognitive => &dna.psychology.cognitive,
        ProfileField::Learning => &dna.psychology.learning,
        ProfileField::Motivation => &dna.psychology.motivation,
        ProfileField::Temperament => &dna.psychology.temperament,
    }
}
