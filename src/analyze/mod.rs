pub mod psychology;
pub mod skills;

use crate::types::profile::{Assessment, DnaProfile, DnaSkill};

/// Turns a raw submission into the labelled DNA profile.
pub fn analyze(assessment: &Assessment) -> DnaProfile {
    let buckets = skills::analyze_skills(
        &assessment.raw_skills,
        &assessment.experiences,
        &assessment.interest,
    );
    let skill = DnaSkill::new(
        &assessment.raw_skills,
        &assessment.experiences,
        &assessment.interest,
        buckets,
    );
    let psychology = psychology::analyze_psychology(&assessment.answers);
    tracing::debug!(
        strong = %skill.skill_strong,
        cognitive = %psychology.cognitive,
        "assessment analyzed"
    );
    DnaProfile { skill, psychology }
}
