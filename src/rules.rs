//! Fixed rule tables consumed by the analyzer and the two scorers.
//!
//! Everything here is plain data; the functions that walk these tables take
//! them as arguments so alternative rule sets can be swapped in.

use crate::types::major::TraitVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    RawSkills,
    Experiences,
    Interest,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillRule {
    pub category: &'static str,
    pub strong_keywords: &'static [&'static str],
    pub medium_source: TextSource,
    pub medium_keywords: &'static [&'static str],
}

/// Strong always reads `raw_skills`; medium reads the listed source.
pub const SKILL_RULES: &[SkillRule] = &[
    SkillRule {
        category: "Programming",
        strong_keywords: &["program", "coding", "it"],
        medium_source: TextSource::Interest,
        medium_keywords: &["teknologi", "it"],
    },
    SkillRule {
        category: "Desain",
        strong_keywords: &["desain", "design", "grafis"],
        medium_source: TextSource::Interest,
        medium_keywords: &["seni", "kreativ"],
    },
    SkillRule {
        category: "Komunikasi",
        strong_keywords: &["komunikasi", "public speaking", "presentasi"],
        medium_source: TextSource::Experiences,
        medium_keywords: &["organisasi", "tim"],
    },
    SkillRule {
        category: "Analitis",
        strong_keywords: &["analisis", "data", "statistik"],
        medium_source: TextSource::Interest,
        medium_keywords: &["riset", "penelitian"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Cognitive,
    Learning,
    Motivation,
    Temperament,
}

#[derive(Debug, Clone, Copy)]
pub struct DimensionRule {
    pub dimension: Dimension,
    pub slots: [(u8, &'static str); 3],
}

pub const PSYCHOLOGY_DIMENSIONS: &[DimensionRule] = &[
    DimensionRule {
        dimension: Dimension::Cognitive,
        slots: [
            (1, "Analitis & Logis"),
            (2, "Terstruktur & Data"),
            (3, "Kreatif & Inovatif"),
        ],
    },
    DimensionRule {
        dimension: Dimension::Learning,
        slots: [
            (4, "Visual (Grafis)"),
            (5, "Auditory (Diskusi)"),
            (6, "Kinestetik (Praktik)"),
        ],
    },
    DimensionRule {
        dimension: Dimension::Motivation,
        slots: [
            (7, "Dampak Sosial"),
            (8, "Kepemimpinan"),
            (9, "Tantangan & Prestasi"),
        ],
    },
    DimensionRule {
        dimension: Dimension::Temperament,
        slots: [
            (10, "Teliti & Detail"),
            (11, "Kolaboratif"),
            (12, "Adaptif & Tenang"),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitDimension {
    Investigative,
    Realistic,
    Conventional,
    Artistic,
    Social,
    Enterprising,
    Visual,
    Auditory,
    Kinesthetic,
}

impl TraitDimension {
    pub fn weight(self, vector: &TraitVector) -> u8 {
        match self {
            Self::Investigative => vector.investigative,
            Self::Realistic => vector.realistic,
            Self::Conventional => vector.conventional,
            Self::Artistic => vector.artistic,
            Self::Social => vector.social,
            Self::Enterprising => vector.enterprising,
            Self::Visual => vector.visual,
            Self::Auditory => vector.auditory,
            Self::Kinesthetic => vector.kinesthetic,
        }
    }
}

/// One weighted component: a dot product of answers and trait weights,
/// divided by a fixed non-zero normalizer.
#[derive(Debug, Clone, Copy)]
pub struct ComponentRule {
    pub terms: &'static [(u8, TraitDimension)],
    pub denominator: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct WeightedRules {
    pub cognitive: ComponentRule,
    pub learning: ComponentRule,
    pub motivation: ComponentRule,
    pub skill_multipliers: &'static [(TextSource, f64)],
    pub skill_cap: f64,
}

pub const WEIGHTED_RULES: WeightedRules = WeightedRules {
    cognitive: ComponentRule {
        terms: &[
            (1, TraitDimension::Investigative),
            (2, TraitDimension::Conventional),
            (3, TraitDimension::Artistic),
        ],
        denominator: 15.0,
    },
    learning: ComponentRule {
        terms: &[
            (4, TraitDimension::Visual),
            (5, TraitDimension::Auditory),
            (6, TraitDimension::Kinesthetic),
        ],
        denominator: 15.0,
    },
    motivation: ComponentRule {
        terms: &[
            (7, TraitDimension::Social),
            (8, TraitDimension::Enterprising),
            (9, TraitDimension::Realistic),
            (10, TraitDimension::Conventional),
        ],
        denominator: 20.0,
    },
    skill_multipliers: &[
        (TextSource::RawSkills, 15.0),
        (TextSource::Interest, 10.0),
        (TextSource::Experiences, 5.0),
    ],
    skill_cap: 100.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    SkillStrong,
    Interest,
    Cognitive,
    Learning,
    Motivation,
    Temperament,
}

#[derive(Debug, Clone, Copy)]
pub enum Condition {
    All(&'static [Condition]),
    Any(&'static [Condition]),
    /// Major's comma-separated trait labels contain any keyword.
    MajorTraits(&'static [&'static str]),
    /// Major's display name contains any keyword.
    MajorName(&'static [&'static str]),
    Profile(ProfileField, &'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct HeuristicRule {
    pub id: &'static str,
    pub condition: Condition,
    pub points: u32,
    pub reason: &'static str,
}

pub const HEURISTIC_BASE_SCORE: u32 = 30;
pub const HEURISTIC_MAX_SCORE: u32 = 100;
pub const HEURISTIC_DEFAULT_REASON: &str = "Profil Anda menunjukkan potensi untuk jurusan ini";

pub const HEURISTIC_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        id: "skill.programming",
        condition: Condition::All(&[
            Condition::MajorTraits(&["logis", "teknis", "problem-solving"]),
            Condition::Profile(ProfileField::SkillStrong, &["programming", "analitis"]),
        ]),
        points: 20,
        reason: "Sesuai dengan kemampuan programming/analitis Anda",
    },
    HeuristicRule {
        id: "skill.design",
        condition: Condition::All(&[
            Condition::MajorTraits(&["kreatif", "visual", "artistik", "estetis"]),
            Condition::Any(&[
                Condition::Profile(ProfileField::SkillStrong, &["desain"]),
                Condition::Profile(ProfileField::Interest, &["seni"]),
            ]),
        ]),
        points: 20,
        reason: "Cocok dengan kemampuan kreatif dan desain Anda",
    },
    HeuristicRule {
        id: "skill.communication",
        condition: Condition::All(&[
            Condition::MajorTraits(&["komunikatif", "sosial", "kepemimpinan"]),
            Condition::Any(&[
                Condition::Profile(ProfileField::SkillStrong, &["komunikasi"]),
                Condition::Profile(ProfileField::Temperament, &["sosial"]),
            ]),
        ]),
        points: 20,
        reason: "Sesuai dengan kemampuan komunikasi dan sosial Anda",
    },
    HeuristicRule {
        id: "skill.analytical",
        condition: Condition::All(&[
            Condition::MajorTraits(&["analitis", "detail-oriented", "teliti"]),
            Condition::Any(&[
                Condition::Profile(ProfileField::SkillStrong, &["analitis"]),
                Condition::Profile(ProfileField::Cognitive, &["analitis"]),
            ]),
        ]),
        points: 20,
        reason: "Cocok dengan kemampuan analitis Anda",
    },
    HeuristicRule {
        id: "learning.visual",
        condition: Condition::All(&[
            Condition::Profile(ProfileField::Learning, &["visual"]),
            Condition::MajorTraits(&["visual"]),
        ]),
        points: 15,
        reason: "Sesuai dengan gaya belajar visual Anda",
    },
    HeuristicRule {
        id: "motivation.intrinsic",
        condition: Condition::All(&[
            Condition::Profile(ProfileField::Motivation, &["intrinsik"]),
            Condition::MajorTraits(&["sosial", "empati"]),
        ]),
        points: 15,
        reason: "Sesuai dengan motivasi intrinsik Anda",
    },
    HeuristicRule {
        id: "interest.technology",
        condition: Condition::All(&[
            Condition::Profile(ProfileField::Interest, &["teknologi", "komputer"]),
            Condition::MajorName(&["informatika", "teknik"]),
        ]),
        points: 15,
        reason: "Sesuai dengan minat Anda di bidang teknologi",
    },
    HeuristicRule {
        id: "interest.business",
        condition: Condition::All(&[
            Condition::Profile(ProfileField::Interest, &["bisnis", "ekonomi"]),
            Condition::MajorName(&["manajemen", "akuntansi"]),
        ]),
        points: 15,
        reason: "Sesuai dengan minat Anda di bidang bisnis",
    },
    HeuristicRule {
        id: "interest.health",
        condition: Condition::All(&[
            Condition::Profile(ProfileField::Interest, &["kesehatan", "medis"]),
            Condition::MajorName(&["kedokteran"]),
        ]),
        points: 15,
        reason: "Sesuai dengan minat Anda di bidang kesehatan",
    },
    HeuristicRule {
        id: "interest.art",
        condition: Condition::All(&[
            Condition::Profile(ProfileField::Interest, &["seni", "desain"]),
            Condition::MajorName(&["desain", "arsitektur"]),
        ]),
        points: 15,
        reason: "Sesuai dengan minat Anda di bidang seni",
    },
    HeuristicRule {
        id: "interest.law",
        condition: Condition::All(&[
            Condition::Profile(ProfileField::Interest, &["hukum"]),
            Condition::MajorName(&["hukum"]),
        ]),
        points: 15,
        reason: "Sesuai dengan minat Anda di bidang hukum",
    },
    HeuristicRule {
        id: "interest.social",
        condition: Condition::All(&[
            Condition::Profile(ProfileField::Interest, &["sosial", "psikologi"]),
            Condition::MajorName(&["psikologi", "komunikasi"]),
        ]),
        points: 15,
        reason: "Sesuai dengan minat Anda di bidang sosial dan psikologi",
    },
];
