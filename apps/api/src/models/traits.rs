use serde::{Deserialize, Serialize};

/// Big Five personality vector. Every dimension lives in [1, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

pub const TRAIT_MIN: u8 = 1;
pub const TRAIT_MAX: u8 = 100;

impl PersonalityTraits {
    pub const fn new(
        openness: u8,
        conscientiousness: u8,
        extraversion: u8,
        agreeableness: u8,
        neuroticism: u8,
    ) -> Self {
        Self {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        }
    }

    pub fn as_array(&self) -> [u8; 5] {
        [
            self.openness,
            self.conscientiousness,
            self.extraversion,
            self.agreeableness,
            self.neuroticism,
        ]
    }

    pub fn is_in_range(&self) -> bool {
        self.as_array()
            .iter()
            .all(|v| (TRAIT_MIN..=TRAIT_MAX).contains(v))
    }
}

/// Six cognitive scores, each in [1, 10]. Independent of personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitiveProfile {
    pub logical_reasoning: u8,
    pub creative_thinking: u8,
    pub social_intelligence: u8,
    pub abstract_reasoning: u8,
    pub verbal_communication: u8,
    pub quantitative_ability: u8,
}

impl CognitiveProfile {
    pub fn as_array(&self) -> [u8; 6] {
        [
            self.logical_reasoning,
            self.creative_thinking,
            self.social_intelligence,
            self.abstract_reasoning,
            self.verbal_communication,
            self.quantitative_ability,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    Direct,
    Collaborative,
    Diplomatic,
    Analytical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictResolutionStyle {
    Collaborative,
    Competing,
    Accommodating,
    Avoiding,
}

impl ConflictResolutionStyle {
    pub const ALL: [ConflictResolutionStyle; 4] = [
        ConflictResolutionStyle::Collaborative,
        ConflictResolutionStyle::Competing,
        ConflictResolutionStyle::Accommodating,
        ConflictResolutionStyle::Avoiding,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamPlayerType {
    Leader,
    Collaborator,
    Specialist,
    Contributor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStyle {
    Methodical,
    Rapid,
    Iterative,
    Comprehensive,
}

impl WorkStyle {
    pub const ALL: [WorkStyle; 4] = [
        WorkStyle::Methodical,
        WorkStyle::Rapid,
        WorkStyle::Iterative,
        WorkStyle::Comprehensive,
    ];
}

/// `Comprehensive` only appears through the conscientiousness rule; the
/// ungated fallback draws from the four core styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMakingStyle {
    Analytical,
    Intuitive,
    Collaborative,
    Decisive,
    Comprehensive,
}

impl DecisionMakingStyle {
    pub const CORE: [DecisionMakingStyle; 4] = [
        DecisionMakingStyle::Analytical,
        DecisionMakingStyle::Intuitive,
        DecisionMakingStyle::Collaborative,
        DecisionMakingStyle::Decisive,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkBehaviorPatterns {
    pub communication_style: CommunicationStyle,
    pub conflict_resolution_style: ConflictResolutionStyle,
    pub team_player_type: TeamPlayerType,
    pub work_style: WorkStyle,
    pub decision_making_style: DecisionMakingStyle,
}
