use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::experience::ProfessionalExperience;
use crate::models::params::CandidateGenerationParams;
use crate::models::performance::InterviewPerformance;
use crate::models::skills::TechnicalSkills;
use crate::models::traits::{CognitiveProfile, PersonalityTraits, WorkBehaviorPatterns};

pub const RECORD_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: String,
    pub github_url: Option<String>,
    /// Background summary, only filled by the enhancement adapter.
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    Generated,
    AiEnhanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: String,
    pub source: CandidateSource,
    pub generation_params: CandidateGenerationParams,
    /// Provenance log: archetype, experience level, focus, quality, flaws.
    pub tags: Vec<String>,
}

/// Root aggregate. Self-contained, so it serializes without external references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub personal_info: PersonalInfo,
    pub personality: PersonalityTraits,
    pub work_behavior: WorkBehaviorPatterns,
    pub cognitive_profile: CognitiveProfile,
    pub technical_skills: TechnicalSkills,
    pub experience: ProfessionalExperience,
    pub interview_performance: InterviewPerformance,
    pub metadata: CandidateMetadata,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.personal_info.first_name, self.personal_info.last_name
        )
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.metadata.tags.push(tag.into());
    }

    pub fn add_red_flag(&mut self, flag: impl Into<String>) {
        self.interview_performance
            .potential_red_flags
            .push(flag.into());
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.metadata.tags.iter().any(|t| t == tag)
    }
}
