use crate::types::major::Major;
use crate::types::profile::DnaProfile;
use crate::types::report::{MajorExplanation, MatchResult, RankedMajors, RecommendationRecord};

pub fn profile_to_markdown(profile: &DnaProfile) -> String {
    let mut output = String::new();
    output.push_str("# DNA Profile\n\n");
    output.push_str("## Skills\n\n");
    output.push_str(&format!(
        "- strong: {}\n- medium: {}\n- weak: {}\n\n",
        profile.skill.skill_strong, profile.skill.skill_medium, profile.skill.skill_weak
    ));
    output.push_str("## Psychology\n\n");
    output.push_str(&format!(
        "- cognitive: {}\n- learning: {}\n- motivation: {}\n- trait: {}\n",
        profile.psychology.cognitive,
        profile.psychology.learning,
        profile.psychology.motivation,
        profile.psychology.temperament
    ));
    output
}

pub fn ranked_to_markdown(ranked: &RankedMajors) -> String {
    let mut output = String::new();
    output.push_str("# Major Recommendations\n\n");
    output.push_str(&format!("Strategy: {}\n\n", ranked.strategy));

    output.push_str("## Top Matches\n\n");
    push_results(&mut output, ranked.highlight(), 1);

    let remainder = ranked.remainder();
    if !remainder.is_empty() {
        output.push_str("\n## Other Majors\n\n");
        push_results(&mut output, remainder, ranked.highlight().len() + 1);
    }
    output
}

fn push_results(output: &mut String, results: &[MatchResult], first_rank: usize) {
    if results.is_empty() {
        output.push_str("- none\n");
        return;
    }
    for (offset, result) in results.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({}): {}\n",
            first_rank + offset,
            result.major_name,
            result.major_id,
            result.score
        ));
        for reason in &result.reasons {
            output.push_str(&format!("   - {reason}\n"));
        }
    }
}

pub fn explanations_to_markdown(explanations: &[MajorExplanation], plans: &[Vec<String>]) -> String {
    let mut output = String::new();
    output.push_str("# Explanations\n\n");
    if explanations.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for (index, explanation) in explanations.iter().enumerate() {
        output.push_str(&format!("## {}\n\n{}\n", explanation.major_name, explanation.explanation));
        push_list(&mut output, "Strengths", &explanation.key_strengths);
        push_list(&mut output, "Growth areas", &explanation.growth_areas);
        if let Some(plan) = plans.get(index) {
            push_list(&mut output, "Learning plan", plan);
        }
        output.push('\n');
    }
    output
}

fn push_list(output: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    output.push_str(&format!("\n{title}:\n"));
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
}

pub fn history_to_markdown(records: &[RecommendationRecord]) -> String {
    let mut output = String::new();
    output.push_str("# Recommendation History\n\n");
    if records.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for record in records {
        let best = record
            .results
            .first()
            .map(|result| format!("{} ({})", result.major_name, result.score))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "- {} [{}] {}: top {}\n",
            record.created_at, record.strategy, record.record_id, best
        ));
    }
    output
}

pub fn majors_to_markdown(majors: &[Major]) -> String {
    let mut output = String::new();
    output.push_str("# Majors\n\n");
    if majors.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for major in majors {
        output.push_str(&format!(
            "- {}: {} ({}, {})\n",
            major.id, major.name, major.university, major.category
        ));
    }
    output
}
