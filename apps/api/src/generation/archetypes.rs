//! Archetype Library: named personality presets used as generation baselines.
//!
//! Two read-only pools: constructive archetypes seed ordinary candidates,
//! problematic archetypes replace personality during poor/terrible quality
//! degradation. Both are plain statics, safe for concurrent reads.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::models::traits::{
    CommunicationStyle, ConflictResolutionStyle, DecisionMakingStyle, PersonalityTraits,
    TeamPlayerType, WorkBehaviorPatterns, WorkStyle,
};

pub const DEFAULT_ARCHETYPE: &str = "balanced";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypePool {
    Constructive,
    Problematic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Archetype {
    pub name: &'static str,
    pub description: &'static str,
    pub pool: ArchetypePool,
    pub baseline: PersonalityTraits,
    pub behavior: WorkBehaviorPatterns,
}

const fn behavior(
    communication_style: CommunicationStyle,
    conflict_resolution_style: ConflictResolutionStyle,
    team_player_type: TeamPlayerType,
    work_style: WorkStyle,
    decision_making_style: DecisionMakingStyle,
) -> WorkBehaviorPatterns {
    WorkBehaviorPatterns {
        communication_style,
        conflict_resolution_style,
        team_player_type,
        work_style,
        decision_making_style,
    }
}

pub static CONSTRUCTIVE: [Archetype; 5] = [
    Archetype {
        name: "balanced",
        description: "Well-rounded professional with steady habits and no extreme traits",
        pool: ArchetypePool::Constructive,
        baseline: PersonalityTraits::new(60, 65, 50, 65, 35),
        behavior: behavior(
            CommunicationStyle::Collaborative,
            ConflictResolutionStyle::Collaborative,
            TeamPlayerType::Contributor,
            WorkStyle::Iterative,
            DecisionMakingStyle::Analytical,
        ),
    },
    Archetype {
        name: "innovator",
        description: "Curious idea generator who prototypes quickly and challenges assumptions",
        pool: ArchetypePool::Constructive,
        baseline: PersonalityTraits::new(90, 55, 60, 55, 40),
        behavior: behavior(
            CommunicationStyle::Direct,
            ConflictResolutionStyle::Collaborative,
            TeamPlayerType::Contributor,
            WorkStyle::Rapid,
            DecisionMakingStyle::Intuitive,
        ),
    },
    Archetype {
        name: "specialist",
        description: "Deep technical expert who prefers focused, careful work",
        pool: ArchetypePool::Constructive,
        baseline: PersonalityTraits::new(65, 85, 30, 55, 35),
        behavior: behavior(
            CommunicationStyle::Analytical,
            ConflictResolutionStyle::Accommodating,
            TeamPlayerType::Specialist,
            WorkStyle::Methodical,
            DecisionMakingStyle::Analytical,
        ),
    },
    Archetype {
        name: "leader",
        description: "Confident organizer who sets direction and grows the people around them",
        pool: ArchetypePool::Constructive,
        baseline: PersonalityTraits::new(70, 75, 85, 60, 30),
        behavior: behavior(
            CommunicationStyle::Direct,
            ConflictResolutionStyle::Collaborative,
            TeamPlayerType::Leader,
            WorkStyle::Comprehensive,
            DecisionMakingStyle::Decisive,
        ),
    },
    Archetype {
        name: "collaborator",
        description: "Team-first engineer who builds consensus and unblocks others",
        pool: ArchetypePool::Constructive,
        baseline: PersonalityTraits::new(65, 65, 60, 85, 30),
        behavior: behavior(
            CommunicationStyle::Diplomatic,
            ConflictResolutionStyle::Accommodating,
            TeamPlayerType::Collaborator,
            WorkStyle::Iterative,
            DecisionMakingStyle::Collaborative,
        ),
    },
];

// Every problematic baseline keeps agreeableness <= 45 and neuroticism >= 60,
// below and above the constructive pool respectively.
pub static PROBLEMATIC: [Archetype; 5] = [
    Archetype {
        name: "arrogant",
        description: "Overconfident individual who dismisses input and dominates discussions",
        pool: ArchetypePool::Problematic,
        baseline: PersonalityTraits::new(40, 55, 80, 15, 60),
        behavior: behavior(
            CommunicationStyle::Direct,
            ConflictResolutionStyle::Competing,
            TeamPlayerType::Leader,
            WorkStyle::Rapid,
            DecisionMakingStyle::Decisive,
        ),
    },
    Archetype {
        name: "lazy",
        description: "Coasting employee who does the minimum and avoids ownership",
        pool: ArchetypePool::Problematic,
        baseline: PersonalityTraits::new(30, 15, 45, 40, 60),
        behavior: behavior(
            CommunicationStyle::Direct,
            ConflictResolutionStyle::Avoiding,
            TeamPlayerType::Contributor,
            WorkStyle::Rapid,
            DecisionMakingStyle::Intuitive,
        ),
    },
    Archetype {
        name: "toxic",
        description: "Hostile colleague who creates friction and undermines teammates",
        pool: ArchetypePool::Problematic,
        baseline: PersonalityTraits::new(35, 40, 65, 10, 85),
        behavior: behavior(
            CommunicationStyle::Direct,
            ConflictResolutionStyle::Competing,
            TeamPlayerType::Contributor,
            WorkStyle::Rapid,
            DecisionMakingStyle::Decisive,
        ),
    },
    Archetype {
        name: "job_hopper",
        description: "Restless employee who rarely stays long enough to finish anything",
        pool: ArchetypePool::Problematic,
        baseline: PersonalityTraits::new(75, 35, 60, 40, 65),
        behavior: behavior(
            CommunicationStyle::Collaborative,
            ConflictResolutionStyle::Avoiding,
            TeamPlayerType::Contributor,
            WorkStyle::Rapid,
            DecisionMakingStyle::Intuitive,
        ),
    },
    Archetype {
        name: "inexperienced_pretender",
        description: "Candidate who overstates their depth and bluffs through gaps",
        pool: ArchetypePool::Problematic,
        baseline: PersonalityTraits::new(45, 30, 70, 45, 70),
        behavior: behavior(
            CommunicationStyle::Direct,
            ConflictResolutionStyle::Avoiding,
            TeamPlayerType::Contributor,
            WorkStyle::Rapid,
            DecisionMakingStyle::Intuitive,
        ),
    },
];

/// Looks up an archetype by name across both pools. Unknown names fall back
/// to "balanced"; this never fails.
pub fn lookup(name: &str) -> &'static Archetype {
    let wanted = normalize(name);
    CONSTRUCTIVE
        .iter()
        .chain(PROBLEMATIC.iter())
        .find(|a| a.name == wanted)
        .unwrap_or(&CONSTRUCTIVE[0])
}

pub fn random_problematic<R: Rng + ?Sized>(rng: &mut R) -> &'static Archetype {
    PROBLEMATIC.choose(rng).unwrap_or(&PROBLEMATIC[0])
}

pub fn all() -> impl Iterator<Item = &'static Archetype> {
    CONSTRUCTIVE.iter().chain(PROBLEMATIC.iter())
}

/// "Job-Hopper" and "job hopper" both resolve to `job_hopper`.
fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}
