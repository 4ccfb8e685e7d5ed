//! Flaw mutators: one transform per `FlawType`, dispatched by tag.
//!
//! Every mutator overwrites specific fields and pushes at least one red
//! flag. `apply_flaw` then re-runs the threshold flag and strength rules
//! against the mutated traits, applies the flaw's declared score impact and
//! records the flaw name in the candidate's tags.

use chrono::Duration;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::flaws::library::FlawType;
use crate::generation::interview::refresh_thresholds;
use crate::generation::traits::trait_in;
use crate::models::candidate::Candidate;
use crate::models::experience::PreviousPosition;
use crate::models::performance::{AnswerStructure, Level, ScoreGroup, SCORE_MAX, SCORE_MIN};
use crate::models::skills::ProficiencyLevel;
use crate::models::traits::{
    CommunicationStyle, ConflictResolutionStyle, DecisionMakingStyle, WorkStyle,
};

const DAYS_PER_MONTH: i64 = 30;

pub fn apply_flaw<R: Rng + ?Sized>(candidate: &mut Candidate, flaw: FlawType, rng: &mut R) {
    match flaw {
        FlawType::SkillExaggeration => skill_exaggeration(candidate, rng),
        FlawType::PoorCommunication => poor_communication(candidate, rng),
        FlawType::ToxicPersonality => toxic_personality(candidate, rng),
        FlawType::JobHopper => job_hopper(candidate, rng),
        FlawType::SkillGaps => skill_gaps(candidate, rng),
        FlawType::CulturalMisfit => cultural_misfit(candidate),
        FlawType::LazyWorker => lazy_worker(candidate, rng),
        FlawType::ArrogantAttitude => arrogant_attitude(candidate, rng),
        FlawType::Unreliable => unreliable(candidate, rng),
        FlawType::ResistantToFeedback => resistant_to_feedback(candidate, rng),
        FlawType::PoorProblemSolving => poor_problem_solving(candidate, rng),
        FlawType::AttentionIssues => attention_issues(candidate, rng),
    }

    refresh_thresholds(
        &candidate.personality,
        &candidate.cognitive_profile,
        &mut candidate.interview_performance,
    );
    apply_impact(candidate, flaw);
    candidate.add_tag(flaw.as_str());
}

/// Applies a flaw by name. Unknown names leave the candidate untouched and
/// return `false`.
pub fn apply_named_flaw<R: Rng + ?Sized>(candidate: &mut Candidate, name: &str, rng: &mut R) -> bool {
    match name.parse::<FlawType>() {
        Ok(flaw) => {
            apply_flaw(candidate, flaw, rng);
            true
        }
        Err(()) => {
            debug!("Ignoring unknown flaw type {:?}", name);
            false
        }
    }
}

fn apply_impact(candidate: &mut Candidate, flaw: FlawType) {
    let impact = flaw.definition().impact;
    let scores = &mut candidate.interview_performance.simulated_interview_scores;
    for group in [
        ScoreGroup::Technical,
        ScoreGroup::Behavioral,
        ScoreGroup::Cultural,
    ] {
        let delta = impact.for_group(group) as i32;
        for score in scores.group_mut(group) {
            *score = (*score as i32 + delta).clamp(SCORE_MIN as i32, SCORE_MAX as i32) as u8;
        }
    }
}

fn skill_exaggeration<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    let shallow = [ProficiencyLevel::Beginner, ProficiencyLevel::Intermediate];
    for skill in &mut c.technical_skills.programming_languages {
        skill.years_experience = rng.gen_range(5..=12);
        skill.proficiency = *shallow.choose(rng).unwrap_or(&ProficiencyLevel::Beginner);
    }
    c.add_red_flag("Claims extensive experience that is not reflected in demonstrated skill depth");
}

fn poor_communication<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    c.cognitive_profile.verbal_communication = rng.gen_range(2..=4);
    c.interview_performance.response_patterns.answer_structure = AnswerStructure::Rambling;
    c.add_red_flag("Answers are unfocused and difficult to follow");
}

fn toxic_personality<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    c.personality.agreeableness = trait_in(10, 30, rng);
    c.personality.neuroticism = trait_in(70, 90, rng);
    c.work_behavior.conflict_resolution_style = ConflictResolutionStyle::Competing;
    c.add_red_flag("Displays hostility toward colleagues and dismisses their contributions");
    c.add_red_flag("Escalates disagreements instead of resolving them");
}

/// Replaces history with 3–6 short stints and ends the current role within
/// the last three months. Consecutive stints may overlap by up to a month.
fn job_hopper<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    let today = c.metadata.created_at.date_naive();
    let exp = &mut c.experience;

    let ended = today - Duration::days(rng.gen_range(0..=89));
    exp.current_position.end_date = Some(ended);
    exp.current_position.is_current_role = false;
    exp.current_position.start_date = ended - Duration::days(rng.gen_range(4..=10) * DAYS_PER_MONTH);

    let template = exp.previous_positions.first().cloned();
    let stints = rng.gen_range(3..=6);
    let mut cursor = exp.current_position.start_date;
    let mut history = Vec::with_capacity(stints);
    for _ in 0..stints {
        let end_date = cursor + Duration::days(rng.gen_range(0..=30));
        let start_date = end_date - Duration::days(rng.gen_range(4..=14) * DAYS_PER_MONTH);
        history.push(PreviousPosition {
            title: exp.current_position.title.clone(),
            company: format!("{} (contract)", exp.current_position.company),
            industry: exp.current_position.industry.clone(),
            location: exp.current_position.location.clone(),
            start_date,
            end_date,
            description: "Short engagement, left before project completion".to_string(),
            achievements: Vec::new(),
            team_size: template.as_ref().and_then(|t| t.team_size),
            technologies_used: template
                .as_ref()
                .map(|t| t.technologies_used.clone())
                .unwrap_or_default(),
        });
        cursor = start_date;
    }
    exp.previous_positions = history;

    let held = stints + 1;
    c.add_red_flag(format!(
        "Held {held} positions in quick succession, most for under a year"
    ));
}

fn skill_gaps<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    let skills = &mut c.technical_skills;
    skills.frameworks.truncate(1);
    let design = &mut skills.system_design;
    for score in [
        &mut design.microservices,
        &mut design.monolithic,
        &mut design.cloud_native,
        &mut design.database,
        &mut design.security,
    ] {
        *score = (*score).min(rng.gen_range(1..=3));
    }
    skills.methodologies.testing = skills.methodologies.testing.min(rng.gen_range(1..=3));
    c.add_red_flag("Missing fundamentals in system design and testing practices");
}

fn cultural_misfit(c: &mut Candidate) {
    c.work_behavior.communication_style = CommunicationStyle::Direct;
    c.work_behavior.conflict_resolution_style = ConflictResolutionStyle::Avoiding;
    c.work_behavior.decision_making_style = DecisionMakingStyle::Decisive;
    c.add_red_flag("Values and working style diverge from team norms");
}

fn lazy_worker<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    c.personality.conscientiousness = c.personality.conscientiousness.min(trait_in(10, 30, rng));
    c.work_behavior.work_style = WorkStyle::Rapid;
    c.interview_performance.response_patterns.enthusiasm_level = Level::Low;
    c.add_red_flag("Shows little initiative and does the minimum required");
}

fn arrogant_attitude<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    c.personality.agreeableness = c.personality.agreeableness.min(trait_in(15, 35, rng));
    c.personality.extraversion = c.personality.extraversion.max(trait_in(70, 90, rng));
    c.work_behavior.conflict_resolution_style = ConflictResolutionStyle::Competing;
    c.interview_performance.response_patterns.self_awareness = Level::Low;
    c.add_red_flag("Overstates own contributions and dismisses input from others");
}

/// Pushes the previous history back to open a 9–18 month employment gap.
fn unreliable<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    c.personality.conscientiousness = c.personality.conscientiousness.min(trait_in(15, 35, rng));
    let gap = Duration::days(rng.gen_range(9..=18) * DAYS_PER_MONTH);
    for prev in &mut c.experience.previous_positions {
        prev.start_date -= gap;
        prev.end_date -= gap;
    }
    c.add_red_flag("Unexplained employment gap and a record of missed commitments");
}

fn resistant_to_feedback<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    c.personality.openness = c.personality.openness.min(trait_in(10, 30, rng));
    c.interview_performance.response_patterns.self_awareness = Level::Low;
    c.add_red_flag("Becomes defensive when receiving feedback");
}

fn poor_problem_solving<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    let cog = &mut c.cognitive_profile;
    cog.logical_reasoning = rng.gen_range(2..=4);
    cog.abstract_reasoning = rng.gen_range(2..=4);
    cog.quantitative_ability = rng.gen_range(2..=3);
    c.add_red_flag("Struggles to break down unfamiliar problems");
}

fn attention_issues<R: Rng + ?Sized>(c: &mut Candidate, rng: &mut R) {
    c.personality.conscientiousness = c.personality.conscientiousness.min(trait_in(20, 40, rng));
    c.work_behavior.work_style = WorkStyle::Rapid;
    c.add_red_flag("Overlooks details and loses focus during longer exercises");
}
