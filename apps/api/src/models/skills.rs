use serde::{Deserialize, Serialize};

/// Proficiency bucket. Always derived from years of experience, except where
/// the skill-exaggeration flaw deliberately breaks the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    /// Ten-point value used by interview scoring.
    pub fn points(self) -> u8 {
        match self {
            ProficiencyLevel::Beginner => 3,
            ProficiencyLevel::Intermediate => 5,
            ProficiencyLevel::Advanced => 8,
            ProficiencyLevel::Expert => 10,
        }
    }
}

/// A language, framework, or tool the candidate lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub proficiency: ProficiencyLevel,
    pub years_experience: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemDesignScores {
    pub microservices: u8,
    pub monolithic: u8,
    pub cloud_native: u8,
    pub database: u8,
    pub security: u8,
}

impl SystemDesignScores {
    pub fn as_array(&self) -> [u8; 5] {
        [
            self.microservices,
            self.monolithic,
            self.cloud_native,
            self.database,
            self.security,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodologyScores {
    pub agile: u8,
    pub waterfall: u8,
    pub devops: u8,
    pub testing: u8,
    pub documentation: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSkills {
    pub programming_languages: Vec<SkillEntry>,
    pub frameworks: Vec<SkillEntry>,
    pub system_design: SystemDesignScores,
    pub methodologies: MethodologyScores,
}
