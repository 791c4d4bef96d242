pub mod json;
pub mod md;

use crate::error::MatchError;
use crate::types::major::Major;
use crate::types::profile::DnaProfile;
use crate::types::report::{MajorExplanation, RankedMajors, RecommendationRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

#[derive(Debug, Serialize)]
struct ExplanationEntry<'a> {
    #[serde(flatten)]
    explanation: &'a MajorExplanation,
    learning_plan: &'a [String],
}

pub fn render_profile(profile: &DnaProfile, format: OutputFormat) -> Result<String, MatchError> {
    match format {
        OutputFormat::Json => json::to_json(profile).map_err(MatchError::Json),
        OutputFormat::Md => Ok(md::profile_to_markdown(profile)),
    }
}

pub fn render_ranked(ranked: &RankedMajors, format: OutputFormat) -> Result<String, MatchError> {
    match format {
        OutputFormat::Json => json::to_json(ranked).map_err(MatchError::Json),
        OutputFormat::Md => Ok(md::ranked_to_markdown(ranked)),
    }
}

pub fn render_explanations(
    explanations: &[MajorExplanation],
    plans: &[Vec<String>],
    format: OutputFormat,
) -> Result<String, MatchError> {
    match format {
        OutputFormat::Json => {
            let entries = explanations
                .iter()
                .enumerate()
                .map(|(index, explanation)| ExplanationEntry {
                    explanation,
                    learning_plan: plans.get(index).map(Vec::as_slice).unwrap_or(&[]),
                })
                .collect::<Vec<_>>();
            json::to_json(&entries).map_err(MatchError::Json)
        }
        OutputFormat::Md => Ok(md::explanations_to_markdown(explanations, plans)),
    }
}

pub fn render_history(
    records: &[RecommendationRecord],
    format: OutputFormat,
) -> Result<String, MatchError> {
    match format {
        OutputFormat::Json => json::to_json(records).map_err(MatchError::Json),
        OutputFormat::Md => Ok(md::history_to_markdown(records)),
    }
}

pub fn render_majors(majors: &[Major], format: OutputFormat) -> Result<String, MatchError> {
    match format {
        OutputFormat::Json => json::to_json(majors).map_err(MatchError::Json),
        OutputFormat::Md => Ok(md::majors_to_markdown(majors)),
    }
}

/// A stored recommendation: the record itself as JSON, or the ranked list
/// followed by the record id as markdown.
pub fn render_recommendation(
    record: &RecommendationRecord,
    ranked: &RankedMajors,
    format: OutputFormat,
) -> Result<String, MatchError> {
    match format {
        OutputFormat::Json => json::to_json(record).map_err(MatchError::Json),
        OutputFormat::Md => Ok(format!(
            "{}\nRecord: {}\n",
            md::ranked_to_markdown(ranked),
            record.record_id
        )),
    }
}
