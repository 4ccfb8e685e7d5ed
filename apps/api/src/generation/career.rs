//! Identity and career-history synthesis.
//!
//! History depth scales with experience level. On the happy path previous
//! positions are ordered most recent first, strictly precede the current
//! role, and never overlap each other.

use chrono::{Datelike, Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::candidate::PersonalInfo;
use crate::models::experience::{
    Certification, CurrentPosition, Education, PreviousPosition, ProfessionalExperience,
};
use crate::models::params::{CandidateGenerationParams, ExperienceLevel};
use crate::models::skills::TechnicalSkills;

const MAX_PREVIOUS_POSITIONS: u32 = 3;
const DAYS_PER_MONTH: i64 = 30;

static FIRST_NAMES: [&str; 16] = [
    "Alex", "Jordan", "Priya", "Mateo", "Aisha", "Chen", "Sofia", "Liam", "Noor", "Kenji",
    "Amara", "Lucas", "Elena", "Omar", "Hana", "Diego",
];

static LAST_NAMES: [&str; 16] = [
    "Nguyen", "Patel", "Garcia", "Kim", "Okafor", "Schmidt", "Rossi", "Haddad", "Silva",
    "Kowalski", "Tanaka", "Johnson", "Moreau", "Ivanova", "Mensah", "Larsen",
];

static COMPANIES: [&str; 12] = [
    "Northwind Labs", "Bluepeak Systems", "Cobalt Analytics", "Lumen Health", "Vectorline",
    "Harborview Financial", "Quantum Forge", "Greenfield Retail", "Atlas Logistics",
    "Brightwave Media", "Ironbark Security", "Solstice Cloud",
];

static INDUSTRIES: [&str; 8] = [
    "Technology", "Finance", "Healthcare", "E-commerce", "Logistics", "Media", "Security",
    "Education",
];

static LOCATIONS: [&str; 8] = [
    "San Francisco, CA", "New York, NY", "Austin, TX", "Seattle, WA", "Boston, MA",
    "Chicago, IL", "Denver, CO", "Remote",
];

static INSTITUTIONS: [&str; 8] = [
    "State University", "Institute of Technology", "Lakeside College", "Pacific University",
    "Northern Polytechnic", "Riverside University", "Metropolitan College", "Eastern Tech",
];

static FIELDS: [&str; 4] = [
    "Computer Science",
    "Software Engineering",
    "Information Systems",
    "Mathematics",
];

static CERTIFICATIONS: [(&str, &str); 6] = [
    ("AWS Certified Solutions Architect", "Amazon Web Services"),
    ("Certified Kubernetes Administrator", "CNCF"),
    ("Professional Scrum Master I", "Scrum.org"),
    ("Google Professional Cloud Developer", "Google Cloud"),
    ("Azure Developer Associate", "Microsoft"),
    ("CISSP", "ISC2"),
];

static ACHIEVEMENTS: [&str; 8] = [
    "Reduced service latency by 35% through caching and query tuning",
    "Led migration of a legacy monolith to containerized services",
    "Introduced automated testing that cut regressions by half",
    "Mentored new engineers through onboarding",
    "Shipped a customer-facing feature used by over 100k users",
    "Improved CI pipeline duration from 40 to 12 minutes",
    "Designed an internal API adopted by four teams",
    "Resolved a long-standing data consistency issue in billing",
];

/// Inclusive total-years window per level.
pub fn years_range(level: ExperienceLevel) -> (u32, u32) {
    match level {
        ExperienceLevel::Entry => (0, 2),
        ExperienceLevel::Junior => (2, 4),
        ExperienceLevel::Mid => (4, 8),
        ExperienceLevel::Senior => (8, 15),
        ExperienceLevel::Lead => (12, 20),
        ExperienceLevel::Principal => (15, 25),
    }
}

pub fn previous_position_count(total_years: u32) -> u32 {
    (total_years / 2).min(MAX_PREVIOUS_POSITIONS)
}

/// Title prefix on the seniority ladder, entry = 0.
fn title_for(rank: usize, role: &str) -> String {
    let prefix = match rank {
        0 => "Associate",
        1 => "Junior",
        2 => "",
        3 => "Senior",
        4 => "Lead",
        _ => "Principal",
    };
    if prefix.is_empty() {
        role.to_string()
    } else {
        format!("{prefix} {role}")
    }
}

fn pick<'a, R: Rng + ?Sized>(items: &'a [&'a str], rng: &mut R) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn achievements<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    ACHIEVEMENTS
        .choose_multiple(rng, count)
        .map(|a| a.to_string())
        .collect()
}

pub fn generate_personal_info<R: Rng + ?Sized>(
    params: &CandidateGenerationParams,
    rng: &mut R,
) -> PersonalInfo {
    let first = pick(&FIRST_NAMES, rng);
    let last = pick(&LAST_NAMES, rng);
    let handle = format!("{}{}", first.to_lowercase(), last.to_lowercase());
    let suffix: u16 = rng.gen_range(10..1000);
    let location = params
        .location_preference
        .clone()
        .unwrap_or_else(|| pick(&LOCATIONS, rng).to_string());

    PersonalInfo {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}{}@example.com", first.to_lowercase(), last.to_lowercase(), suffix),
        phone: format!(
            "+1-555-{:03}-{:04}",
            rng.gen_range(100..1000),
            rng.gen_range(0..10000)
        ),
        location,
        linkedin_url: format!("https://linkedin.com/in/{handle}{suffix}"),
        github_url: rng
            .gen_bool(0.7)
            .then(|| format!("https://github.com/{handle}")),
        bio: None,
    }
}

/// Builds a career timeline ending at `today`.
///
/// The total span is split evenly across the current role and the previous
/// roles; consecutive roles are separated by a gap of 1–30 days.
pub fn generate_experience<R: Rng + ?Sized>(
    params: &CandidateGenerationParams,
    skills: &TechnicalSkills,
    today: NaiveDate,
    rng: &mut R,
) -> ProfessionalExperience {
    let level = params.experience_level;
    let (min_years, max_years) = years_range(level);
    let total_years = rng.gen_range(min_years..=max_years);
    let previous_count = previous_position_count(total_years);

    let total_months = (total_years as i64 * 12).max(3);
    let segment_months = (total_months / (previous_count as i64 + 1)).max(3);

    let industry = params
        .industry_background
        .clone()
        .unwrap_or_else(|| pick(&INDUSTRIES, rng).to_string());
    let location = params
        .location_preference
        .clone()
        .unwrap_or_else(|| pick(&LOCATIONS, rng).to_string());
    let role = params.target_role.trim();

    let current_start = today - Duration::days(segment_months * DAYS_PER_MONTH);
    let current_position = CurrentPosition {
        title: title_for(level.rank(), role),
        company: pick(&COMPANIES, rng).to_string(),
        industry: industry.clone(),
        location: location.clone(),
        start_date: current_start,
        end_date: None,
        is_current_role: true,
        description: format!("Works as {} on a cross-functional product team", role),
        achievements: achievements(rng.gen_range(1..=3), rng),
        team_size: (level >= ExperienceLevel::Mid).then(|| rng.gen_range(4..=15)),
        direct_reports: (level >= ExperienceLevel::Lead).then(|| rng.gen_range(2..=10)),
    };

    let stack: Vec<String> = skills
        .programming_languages
        .iter()
        .chain(&skills.frameworks)
        .map(|s| s.name.clone())
        .collect();

    let mut previous_positions = Vec::with_capacity(previous_count as usize);
    let mut next_start = current_start;
    for i in 0..previous_count as usize {
        let end_date = next_start - Duration::days(rng.gen_range(1..=30));
        let start_date = end_date - Duration::days(segment_months * DAYS_PER_MONTH);
        let rank = level.rank().saturating_sub(i + 1);
        previous_positions.push(PreviousPosition {
            title: title_for(rank, role),
            company: pick(&COMPANIES, rng).to_string(),
            industry: industry.clone(),
            location: location.clone(),
            start_date,
            end_date,
            description: format!("Delivered features and maintenance as {}", title_for(rank, role)),
            achievements: achievements(rng.gen_range(1..=2), rng),
            team_size: Some(rng.gen_range(3..=12)),
            technologies_used: stack
                .choose_multiple(rng, stack.len().min(3))
                .cloned()
                .collect(),
        });
        next_start = start_date;
    }

    ProfessionalExperience {
        total_years_experience: total_years,
        current_position,
        previous_positions,
        education: vec![generate_education(level, total_years, today, rng)],
        certifications: generate_certifications(level, today, rng),
    }
}

fn generate_education<R: Rng + ?Sized>(
    level: ExperienceLevel,
    total_years: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Education {
    let degree = if level >= ExperienceLevel::Senior && rng.gen_bool(0.4) {
        "Master of Science"
    } else {
        "Bachelor of Science"
    };
    Education {
        institution: pick(&INSTITUTIONS, rng).to_string(),
        degree: degree.to_string(),
        field_of_study: pick(&FIELDS, rng).to_string(),
        graduation_year: today.year() - total_years as i32 - rng.gen_range(0..=1),
        gpa: rng
            .gen_bool(0.5)
            .then(|| (rng.gen_range(28..=40) as f32) / 10.0),
    }
}

fn generate_certifications<R: Rng + ?Sized>(
    level: ExperienceLevel,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<Certification> {
    let count = rng.gen_range(0..=level.rank().min(3));
    CERTIFICATIONS
        .choose_multiple(rng, count)
        .map(|(name, issuer)| Certification {
            name: name.to_string(),
            issuer: issuer.to_string(),
            year_obtained: today.year() - rng.gen_range(0..=4),
        })
        .collect()
}
