use crate::rules::{SkillRule, TextSource, SKILL_RULES};
use crate::text::contains_any;
use crate::types::profile::{SkillBuckets, EMPTY_BUCKET};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Strong,
    Medium,
    Weak,
}

pub fn analyze_skills(raw_skills: &str, experiences: &str, interest: &str) -> SkillBuckets {
    analyze_skills_with(SKILL_RULES, raw_skills, experiences, interest)
}

pub fn analyze_skills_with(
    rules: &[SkillRule],
    raw_skills: &str,
    experiences: &str,
    interest: &str,
) -> SkillBuckets {
    let mut strong = Vec::new();
    let mut medium = Vec::new();
    let mut weak = Vec::new();

    for rule in rules {
        match classify(rule, raw_skills, experiences, interest) {
            SkillLevel::Strong => strong.push(rule.category),
            SkillLevel::Medium => medium.push(rule.category),
            SkillLevel::Weak => weak.push(rule.category),
        }
    }

    SkillBuckets {
        strong: join_bucket(&strong),
        medium: join_bucket(&medium),
        weak: join_bucket(&weak),
    }
}

pub fn classify(rule: &SkillRule, raw_skills: &str, experiences: &str, interest: &str) -> SkillLevel {
    if contains_any(raw_skills, rule.strong_keywords) {
        return SkillLevel::Strong;
    }
    let medium_text = match rule.medium_source {
        TextSource::RawSkills => raw_skills,
        TextSource::Experiences => experiences,
        TextSource::Interest => interest,
    };
    if contains_any(medium_text, rule.medium_keywords) {
        SkillLevel::Medium
    } else {
        SkillLevel::Weak
    }
}

fn join_bucket(categories: &[&str]) -> String {
    if categories.is_empty() {
        EMPTY_BUCKET.to_string()
    } else {
        categories.join(", ")
    }
}
