//! Skill & experience scaling.
//!
//! Years of experience per technology come from a base range scaled by the
//! candidate's experience level; the proficiency bucket is always derived
//! from those years.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::params::ExperienceLevel;
use crate::models::skills::{
    MethodologyScores, ProficiencyLevel, SkillEntry, SystemDesignScores, TechnicalSkills,
};

const LANGUAGE_COUNT: usize = 3;
const FRAMEWORK_COUNT: usize = 4;

/// Catalogue row: base experience range before level scaling, and the focus
/// tags that make this technology preferred.
#[derive(Debug, Clone, Copy)]
pub struct Technology {
    pub name: &'static str,
    pub min_years: u32,
    pub max_years: u32,
    pub domains: &'static [&'static str],
}

const fn tech(
    name: &'static str,
    min_years: u32,
    max_years: u32,
    domains: &'static [&'static str],
) -> Technology {
    Technology {
        name,
        min_years,
        max_years,
        domains,
    }
}

// Base maxima stay at or below 9 so that entry-level scaling (x0.3) caps at
// two years, i.e. never past intermediate.
pub static LANGUAGES: [Technology; 8] = [
    tech("JavaScript", 2, 8, &["frontend", "fullstack", "web"]),
    tech("TypeScript", 2, 7, &["frontend", "fullstack", "web"]),
    tech("Python", 2, 9, &["backend", "data", "ml", "ai"]),
    tech("Java", 2, 9, &["backend", "enterprise"]),
    tech("Go", 2, 6, &["backend", "cloud", "devops"]),
    tech("Rust", 2, 5, &["backend", "systems"]),
    tech("C#", 2, 8, &["backend", "enterprise"]),
    tech("SQL", 2, 9, &["data", "backend"]),
];

pub static FRAMEWORKS: [Technology; 10] = [
    tech("React", 1, 7, &["frontend", "fullstack", "web"]),
    tech("Node.js", 1, 8, &["backend", "fullstack", "web"]),
    tech("Django", 1, 7, &["backend", "web"]),
    tech("Spring Boot", 1, 8, &["backend", "enterprise"]),
    tech("Docker", 1, 7, &["devops", "cloud"]),
    tech("Kubernetes", 1, 6, &["devops", "cloud"]),
    tech("AWS", 1, 8, &["cloud", "devops"]),
    tech("PostgreSQL", 1, 9, &["data", "backend"]),
    tech("PyTorch", 1, 5, &["ml", "ai", "data"]),
    tech("GraphQL", 1, 5, &["frontend", "fullstack", "web"]),
];

/// Maps years of experience to a proficiency bucket. Total over all inputs.
pub fn derive_proficiency(years: u32) -> ProficiencyLevel {
    match years {
        0 => ProficiencyLevel::Beginner,
        1..=2 => ProficiencyLevel::Intermediate,
        3..=6 => ProficiencyLevel::Advanced,
        _ => ProficiencyLevel::Expert,
    }
}

pub fn level_multiplier(level: ExperienceLevel) -> f64 {
    match level {
        ExperienceLevel::Entry => 0.3,
        ExperienceLevel::Junior => 0.5,
        ExperienceLevel::Mid => 1.0,
        ExperienceLevel::Senior => 1.5,
        ExperienceLevel::Lead => 2.0,
        ExperienceLevel::Principal => 2.5,
    }
}

/// Scales a base `(min, max)` range by the level multiplier and draws an
/// integer from it. Both ends are floored and held at a minimum of 1.
pub fn scale_skill_years<R: Rng + ?Sized>(
    base: (u32, u32),
    level: ExperienceLevel,
    rng: &mut R,
) -> u32 {
    let (low, high) = scaled_range(base, level);
    rng.gen_range(low..=high)
}

pub fn scaled_range(base: (u32, u32), level: ExperienceLevel) -> (u32, u32) {
    let multiplier = level_multiplier(level);
    let low = ((base.0 as f64 * multiplier).floor() as u32).max(1);
    let high = ((base.1 as f64 * multiplier).floor() as u32).max(low);
    (low, high)
}

fn skill_entry<R: Rng + ?Sized>(
    technology: &Technology,
    level: ExperienceLevel,
    rng: &mut R,
) -> SkillEntry {
    let years = scale_skill_years((technology.min_years, technology.max_years), level, rng);
    SkillEntry {
        name: technology.name.to_string(),
        proficiency: derive_proficiency(years),
        years_experience: years,
    }
}

/// Orders the catalogue so technologies matching a focus tag come first,
/// each partition shuffled.
fn pick<'a, R: Rng + ?Sized>(
    catalogue: &'a [Technology],
    focus: &[String],
    count: usize,
    rng: &mut R,
) -> Vec<&'a Technology> {
    let focus: Vec<String> = focus.iter().map(|f| f.trim().to_lowercase()).collect();
    let matches = |t: &Technology| {
        focus
            .iter()
            .any(|f| t.name.to_lowercase() == *f || t.domains.iter().any(|d| d == f))
    };

    let (mut preferred, mut rest): (Vec<&Technology>, Vec<&Technology>) =
        catalogue.iter().partition(|t| matches(*t));
    preferred.shuffle(rng);
    rest.shuffle(rng);
    preferred.into_iter().chain(rest).take(count).collect()
}

fn score_band<R: Rng + ?Sized>(level: ExperienceLevel, rng: &mut R) -> u8 {
    // entry 2..=5 up to principal 7..=10
    let floor = 2 + level.rank().min(5) as u8;
    rng.gen_range(floor..=(floor + 3).min(10))
}

pub fn generate_technical_skills<R: Rng + ?Sized>(
    level: ExperienceLevel,
    focus: &[String],
    rng: &mut R,
) -> TechnicalSkills {
    let programming_languages = pick(&LANGUAGES, focus, LANGUAGE_COUNT, rng)
        .into_iter()
        .map(|t| skill_entry(t, level, rng))
        .collect();
    let frameworks = pick(&FRAMEWORKS, focus, FRAMEWORK_COUNT, rng)
        .into_iter()
        .map(|t| skill_entry(t, level, rng))
        .collect();

    TechnicalSkills {
        programming_languages,
        frameworks,
        system_design: SystemDesignScores {
            microservices: score_band(level, rng),
            monolithic: score_band(level, rng),
            cloud_native: score_band(level, rng),
            database: score_band(level, rng),
            security: score_band(level, rng),
        },
        methodologies: MethodologyScores {
            agile: score_band(level, rng),
            waterfall: score_band(level, rng),
            devops: score_band(level, rng),
            testing: score_band(level, rng),
            documentation: score_band(level, rng),
        },
    }
}
