//! Interview performance scoring.
//!
//! Deterministic weighted averages over personality (0–100, scaled down by
//! ten), cognition (1–10) and skill proficiency. Red flags and strengths are
//! additive threshold rules: a profile can collect several of each.

use crate::models::performance::{
    AnswerStructure, BehavioralScores, CulturalScores, InterviewPerformance, InterviewScores,
    Level, ResponsePatterns, StorytellingStyle, TechnicalScores, SCORE_MAX, SCORE_MIN,
};
use crate::models::skills::TechnicalSkills;
use crate::models::traits::{CognitiveProfile, PersonalityTraits};

pub const FLAG_STRESS: &str = "May struggle with stress under pressure";
pub const FLAG_COLLABORATION: &str = "Potential difficulties with team collaboration";
pub const FLAG_REASONING: &str = "Limited quantitative and analytical reasoning";
pub const FLAG_FOLLOW_THROUGH: &str = "May have trouble following through on commitments";

pub const STRENGTH_CREATIVE: &str = "Highly creative and open to new ideas";
pub const STRENGTH_RELIABLE: &str = "Exceptionally reliable and detail-oriented";
pub const STRENGTH_SOCIAL: &str = "Strong interpersonal and social skills";
pub const STRENGTH_LOGIC: &str = "Excellent logical reasoning";

type Threshold = (fn(&PersonalityTraits, &CognitiveProfile) -> bool, &'static str);

static RED_FLAG_RULES: [Threshold; 4] = [
    (|t, _| t.neuroticism > 70, FLAG_STRESS),
    (|t, _| t.agreeableness < 30, FLAG_COLLABORATION),
    (|_, c| c.quantitative_ability < 4, FLAG_REASONING),
    (|t, _| t.conscientiousness < 30, FLAG_FOLLOW_THROUGH),
];

static STRENGTH_RULES: [Threshold; 4] = [
    (|t, _| t.openness > 80, STRENGTH_CREATIVE),
    (|t, _| t.conscientiousness > 80, STRENGTH_RELIABLE),
    (|_, c| c.social_intelligence > 8, STRENGTH_SOCIAL),
    (|_, c| c.logical_reasoning >= 9, STRENGTH_LOGIC),
];

/// Clamps a fractional score onto the interview scale after rounding.
pub fn to_score(value: f64) -> u8 {
    (value.round() as i64).clamp(SCORE_MIN as i64, SCORE_MAX as i64) as u8
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return SCORE_MIN as f64;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Personality dimension on the ten-point scale.
fn p(value: u8) -> f64 {
    value as f64 / 10.0
}

fn c(value: u8) -> f64 {
    value as f64
}

pub fn score_interview(
    traits: &PersonalityTraits,
    cognition: &CognitiveProfile,
    skills: &TechnicalSkills,
) -> InterviewPerformance {
    InterviewPerformance {
        simulated_interview_scores: score_groups(traits, cognition, skills),
        response_patterns: response_patterns(traits, cognition),
        potential_red_flags: matching(&RED_FLAG_RULES, traits, cognition),
        key_strengths: matching(&STRENGTH_RULES, traits, cognition),
    }
}

/// Re-derives red flags, strengths and response patterns after traits were
/// replaced wholesale. Scores are left alone.
pub fn reassess(
    traits: &PersonalityTraits,
    cognition: &CognitiveProfile,
    performance: &mut InterviewPerformance,
) {
    refresh_thresholds(traits, cognition, performance);
    performance.response_patterns = response_patterns(traits, cognition);
}

/// Re-evaluates only the threshold rules. Entries that did not come from a
/// rule (flaw-specific flags, for one) are kept, after the rule entries.
pub fn refresh_thresholds(
    traits: &PersonalityTraits,
    cognition: &CognitiveProfile,
    performance: &mut InterviewPerformance,
) {
    refresh(&mut performance.potential_red_flags, &RED_FLAG_RULES, traits, cognition);
    refresh(&mut performance.key_strengths, &STRENGTH_RULES, traits, cognition);
}

fn matching(
    rules: &[Threshold],
    traits: &PersonalityTraits,
    cognition: &CognitiveProfile,
) -> Vec<String> {
    rules
        .iter()
        .filter(|(when, _)| when(traits, cognition))
        .map(|(_, text)| text.to_string())
        .collect()
}

fn refresh(
    entries: &mut Vec<String>,
    rules: &[Threshold],
    traits: &PersonalityTraits,
    cognition: &CognitiveProfile,
) {
    let mut refreshed = matching(rules, traits, cognition);
    refreshed.extend(
        entries
            .drain(..)
            .filter(|entry| !rules.iter().any(|(_, text)| entry == text)),
    );
    *entries = refreshed;
}

fn score_groups(
    t: &PersonalityTraits,
    cog: &CognitiveProfile,
    skills: &TechnicalSkills,
) -> InterviewScores {
    let coding = to_score(mean(
        &skills
            .programming_languages
            .iter()
            .map(|s| s.proficiency.points() as f64)
            .collect::<Vec<_>>(),
    ));
    let system_design = to_score(mean(
        &skills
            .system_design
            .as_array()
            .iter()
            .map(|v| *v as f64)
            .collect::<Vec<_>>(),
    ));
    let m = &skills.methodologies;

    InterviewScores {
        behavioral: BehavioralScores {
            overall: to_score(mean(&[
                p(t.extraversion),
                p(t.agreeableness),
                c(cog.social_intelligence),
            ])),
            communication: to_score(mean(&[
                p(t.extraversion),
                c(cog.verbal_communication),
            ])),
            problem_solving: to_score(mean(&[
                c(cog.logical_reasoning),
                c(cog.abstract_reasoning),
                c(cog.quantitative_ability),
            ])),
            leadership: to_score(mean(&[
                p(t.extraversion),
                p(t.conscientiousness),
                c(cog.social_intelligence),
            ])),
            teamwork: to_score(mean(&[
                p(t.agreeableness),
                c(cog.social_intelligence),
                p(100u8.saturating_sub(t.neuroticism)),
            ])),
        },
        technical: TechnicalScores {
            coding,
            system_design,
            troubleshooting: to_score(mean(&[
                c(cog.logical_reasoning),
                c(cog.quantitative_ability),
                coding as f64,
            ])),
            best_practices: to_score(mean(&[
                c(m.testing),
                c(m.documentation),
                p(t.conscientiousness),
            ])),
        },
        cultural: CulturalScores {
            company_fit: to_score(mean(&[p(t.agreeableness), p(t.openness)])),
            values_alignment: to_score(mean(&[p(t.conscientiousness), p(t.agreeableness)])),
            collaboration: to_score(mean(&[
                p(t.agreeableness),
                p(t.extraversion),
                c(cog.social_intelligence),
            ])),
            innovation: to_score(mean(&[p(t.openness), c(cog.creative_thinking)])),
        },
    }
}

fn response_patterns(t: &PersonalityTraits, cog: &CognitiveProfile) -> ResponsePatterns {
    let answer_structure = if t.conscientiousness > 70 {
        AnswerStructure::Star
    } else if t.extraversion > 70 && t.conscientiousness < 50 {
        AnswerStructure::Rambling
    } else if cog.verbal_communication >= 7 {
        AnswerStructure::Concise
    } else {
        AnswerStructure::Structured
    };

    let storytelling_style = if t.extraversion > 60 {
        StorytellingStyle::Narrative
    } else if t.openness > 70 {
        StorytellingStyle::Anecdotal
    } else if cog.logical_reasoning >= 7 {
        StorytellingStyle::Technical
    } else {
        StorytellingStyle::FactBased
    };

    let enthusiasm_level = if t.extraversion > 70 {
        Level::High
    } else if t.extraversion < 35 {
        Level::Low
    } else {
        Level::Moderate
    };

    let self_awareness = if t.neuroticism > 70 {
        Level::Low
    } else if t.neuroticism < 40 && t.openness > 60 {
        Level::High
    } else {
        Level::Moderate
    };

    ResponsePatterns {
        answer_structure,
        storytelling_style,
        enthusiasm_level,
        self_awareness,
    }
}
