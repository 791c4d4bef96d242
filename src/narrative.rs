//! Explanations for recommended majors.
//!
//! Generated text comes from an external [`TextGenerator`]; whenever that
//! fails or returns something unparsable, a deterministic template is used
//! instead so callers always get one explanation per major.

use crate::error::{MatchError, Result};
use crate::types::major::Major;
use crate::types::profile::{DnaProfile, EMPTY_BUCKET};
use crate::types::report::{MajorExplanation, MatchResult};

pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Generator used when no service is configured. Always fails, which sends
/// callers down the template path.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl TextGenerator for Unavailable {
    fn generate(&self, _prompt: &str) -> Result<String> {
        Err(MatchError::GeneratorUnavailable(
            "no text generation service configured".to_string(),
        ))
    }
}

/// Replays a fixed response, e.g. one captured from a previous service call.
#[derive(Debug, Clone)]
pub struct Canned(pub String);

impl TextGenerator for Canned {
    fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

pub fn build_explanation_prompt(profile: &DnaProfile, matches: &[MatchResult]) -> String {
    let mut prompt = String::new();
    prompt.push_str("Profil siswa:\n");
    prompt.push_str(&format!("- Keterampilan kuat: {}\n", profile.skill.skill_strong));
    prompt.push_str(&format!("- Keterampilan sedang: {}\n", profile.skill.skill_medium));
    prompt.push_str(&format!("- Minat: {}\n", profile.skill.interest));
    prompt.push_str(&format!("- Pengalaman: {}\n", profile.skill.experiences));
    prompt.push_str(&format!("- Gaya berpikir: {}\n", profile.psychology.cognitive));
    prompt.push_str(&format!("- Gaya belajar: {}\n", profile.psychology.learning));
    prompt.push_str(&format!("- Motivasi: {}\n", profile.psychology.motivation));
    prompt.push_str(&format!("- Karakter: {}\n\n", profile.psychology.temperament));
    prompt.push_str("Jurusan yang direkomendasikan:\n");
    for result in matches {
        prompt.push_str(&format!(
            "- {} (skor {}): {}\n",
            result.major_name,
            result.score,
            result.reasons.join("; ")
        ));
    }
    prompt.push_str(
        "\nBalas hanya dengan array JSON berisi objek \
         {\"majorName\", \"explanation\", \"keyStrengths\", \"growthAreas\"} \
         untuk setiap jurusan di atas.\n",
    );
    prompt
}

/// Parses the service's JSON array, tolerating a surrounding code fence.
pub fn parse_explanations(raw: &str) -> Result<Vec<MajorExplanation>> {
    let body = strip_code_fence(raw.trim());
    let parsed: Vec<MajorExplanation> = serde_json::from_str(body)?;
    Ok(parsed)
}

fn strip_code_fence(raw: &str) -> &str {
    let Some(rest) = raw.strip_prefix("```") else {
        return raw;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

pub fn template_explanation(profile: &DnaProfile, result: &MatchResult) -> MajorExplanation {
    let mut key_strengths = Vec::new();
    if profile.skill.skill_strong != EMPTY_BUCKET && !profile.skill.skill_strong.is_empty() {
        key_strengths.push(format!("Keterampilan kuat: {}", profile.skill.skill_strong));
    }
    key_strengths.extend(result.reasons.iter().cloned());

    let growth_areas = if profile.skill.skill_weak == EMPTY_BUCKET || profile.skill.skill_weak.is_empty() {
        Vec::new()
    } else {
        vec![format!("Kembangkan keterampilan: {}", profile.skill.skill_weak)]
    };

    MajorExplanation {
        major_name: result.major_name.clone(),
        explanation: format!(
            "{} memperoleh skor kecocokan {} dari 100 berdasarkan keterampilan, minat, \
             dan profil psikologi Anda.",
            result.major_name, result.score
        ),
        key_strengths,
        growth_areas,
    }
}

/// One explanation per match, in match order.
pub fn explain_matches(
    generator: &dyn TextGenerator,
    profile: &DnaProfile,
    matches: &[MatchResult],
) -> Vec<MajorExplanation> {
    let prompt = build_explanation_prompt(profile, matches);
    let generated = match generator.generate(&prompt).and_then(|raw| parse_explanations(&raw)) {
        Ok(parsed) => parsed,
        Err(error) => {
            tracing::warn!(%error, "generated explanations unavailable; using templates");
            Vec::new()
        }
    };

    matches
        .iter()
        .map(|result| {
            generated
                .iter()
                .find(|explanation| explanation.major_name.eq_ignore_ascii_case(&result.major_name))
                .cloned()
                .unwrap_or_else(|| template_explanation(profile, result))
        })
        .collect()
}

/// Ordered study plan built from the major's foundational course topics.
pub fn learning_plan(major: &Major) -> Vec<String> {
    major
        .course_topics()
        .iter()
        .enumerate()
        .map(|(index, topic)| format!("Modul {}: {}", index + 1, topic))
        .collect()
}
