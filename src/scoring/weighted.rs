use crate::rules::{ComponentRule, TextSource, WeightedRules, WEIGHTED_RULES};
use crate::text::{keyword_list, overlap_count, tokenize};
use crate::types::config::ComponentWeights;
use crate::types::major::Major;
use crate::types::profile::{Assessment, PsychologyAnswers};
use crate::types::scoring::{ComponentScores, Score};

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedOutcome {
    pub score: u8,
    pub components: ComponentScores,
    pub reasons: Vec<String>,
}

/// Compatibility of one assessment with one major, 0..=100, with each
/// component scaled to its configured weight.
pub fn calculate_compatibility(
    profile: &Assessment,
    major: &Major,
    weights: &ComponentWeights,
) -> WeightedOutcome {
    let components = component_scores(profile, major, weights, &WEIGHTED_RULES);
    WeightedOutcome {
        score: components.finalize(),
        reasons: component_reasons(&components, weights),
        components,
    }
}

pub fn component_scores(
    profile: &Assessment,
    major: &Major,
    weights: &ComponentWeights,
    rules: &WeightedRules,
) -> ComponentScores {
    ComponentScores {
        cognitive: trait_component(&rules.cognitive, &profile.answers, major, weights.cognitive),
        learning: trait_component(&rules.learning, &profile.answers, major, weights.learning),
        motivation: trait_component(&rules.motivation, &profile.answers, major, weights.motivation),
        skills: skill_component(rules, profile, major, weights.skills),
    }
}

fn trait_component(
    rule: &ComponentRule,
    answers: &PsychologyAnswers,
    major: &Major,
    weight: f64,
) -> Score {
    let dot: u32 = rule
        .terms
        .iter()
        .map(|(question, dimension)| {
            u32::from(answers.get(*question)) * u32::from(dimension.weight(&major.weights))
        })
        .sum();
    f64::from(dot) / rule.denominator * weight
}

fn skill_component(rules: &WeightedRules, profile: &Assessment, major: &Major, weight: f64) -> Score {
    let keywords = keyword_list(&major.skills);
    if keywords.is_empty() || rules.skill_cap <= 0.0 {
        return 0.0;
    }

    let raw: f64 = rules
        .skill_multipliers
        .iter()
        .map(|(source, multiplier)| {
            let text = match source {
                TextSource::RawSkills => &profile.raw_skills,
                TextSource::Experiences => &profile.experiences,
                TextSource::Interest => &profile.interest,
            };
            overlap_count(&tokenize(text), &keywords) as f64 * multiplier
        })
        .sum();

    raw.min(rules.skill_cap) / rules.skill_cap * weight
}

/// One justification line per component, in a fixed order.
pub fn component_reasons(components: &ComponentScores, weights: &ComponentWeights) -> Vec<String> {
    vec![
        format!(
            "Kesesuaian gaya berpikir (kognitif) {:.0}/{:.0}",
            components.cognitive, weights.cognitive
        ),
        format!(
            "Kesesuaian gaya belajar {:.0}/{:.0}",
            components.learning, weights.learning
        ),
        format!(
            "Kesesuaian motivasi dan karakter {:.0}/{:.0}",
            components.motivation, weights.motivation
        ),
        format!(
            "Kecocokan keterampilan, minat, dan pengalaman {:.0}/{:.0}",
            components.skills, weights.skills
        ),
    ]
}
