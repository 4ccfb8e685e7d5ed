//! Behavior derivation: maps personality onto work-behavior categories.
//!
//! Each categorical field is driven by a flat priority table of
//! `(predicate, outcomes)` rows evaluated top to bottom. The first matching
//! row wins; when it lists several outcomes one is picked at random. The
//! last row of every table is a catch-all.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::traits::{
    CommunicationStyle, ConflictResolutionStyle, DecisionMakingStyle, PersonalityTraits,
    TeamPlayerType, WorkBehaviorPatterns, WorkStyle,
};

pub struct Rule<T: 'static> {
    pub when: fn(&PersonalityTraits) -> bool,
    pub outcomes: &'static [T],
}

fn always(_: &PersonalityTraits) -> bool {
    true
}

pub static COMMUNICATION_RULES: [Rule<CommunicationStyle>; 3] = [
    Rule {
        when: |t| t.extraversion > 70,
        outcomes: &[CommunicationStyle::Direct, CommunicationStyle::Collaborative],
    },
    Rule {
        when: |t| t.agreeableness > 70,
        outcomes: &[
            CommunicationStyle::Diplomatic,
            CommunicationStyle::Collaborative,
        ],
    },
    Rule {
        when: always,
        outcomes: &[CommunicationStyle::Analytical, CommunicationStyle::Direct],
    },
];

pub static TEAM_PLAYER_RULES: [Rule<TeamPlayerType>; 4] = [
    Rule {
        when: |t| t.extraversion > 80,
        outcomes: &[TeamPlayerType::Leader],
    },
    Rule {
        when: |t| t.agreeableness > 75,
        outcomes: &[TeamPlayerType::Collaborator],
    },
    Rule {
        when: |t| t.conscientiousness > 80,
        outcomes: &[TeamPlayerType::Specialist],
    },
    Rule {
        when: always,
        outcomes: &[TeamPlayerType::Contributor],
    },
];

pub static DECISION_RULES: [Rule<DecisionMakingStyle>; 2] = [
    Rule {
        when: |t| t.conscientiousness > 70,
        outcomes: &[
            DecisionMakingStyle::Analytical,
            DecisionMakingStyle::Comprehensive,
        ],
    },
    Rule {
        when: always,
        outcomes: &DecisionMakingStyle::CORE,
    },
];

pub static CONFLICT_RULES: [Rule<ConflictResolutionStyle>; 1] = [Rule {
    when: always,
    outcomes: &ConflictResolutionStyle::ALL,
}];

pub static WORK_STYLE_RULES: [Rule<WorkStyle>; 1] = [Rule {
    when: always,
    outcomes: &WorkStyle::ALL,
}];

/// Evaluates a rule table against `traits`. Returns `None` only if the table
/// has no catch-all row.
pub fn evaluate<T: Copy, R: Rng + ?Sized>(
    rules: &[Rule<T>],
    traits: &PersonalityTraits,
    rng: &mut R,
) -> Option<T> {
    rules
        .iter()
        .find(|rule| (rule.when)(traits))
        .and_then(|rule| rule.outcomes.choose(rng).copied())
}

pub fn derive_behavior<R: Rng + ?Sized>(
    traits: &PersonalityTraits,
    rng: &mut R,
) -> WorkBehaviorPatterns {
    WorkBehaviorPatterns {
        communication_style: evaluate(&COMMUNICATION_RULES, traits, rng)
            .unwrap_or(CommunicationStyle::Direct),
        conflict_resolution_style: evaluate(&CONFLICT_RULES, traits, rng)
            .unwrap_or(ConflictResolutionStyle::Collaborative),
        team_player_type: evaluate(&TEAM_PLAYER_RULES, traits, rng)
            .unwrap_or(TeamPlayerType::Contributor),
        work_style: evaluate(&WORK_STYLE_RULES, traits, rng).unwrap_or(WorkStyle::Iterative),
        decision_making_style: evaluate(&DECISION_RULES, traits, rng)
            .unwrap_or(DecisionMakingStyle::Analytical),
    }
}
