use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    #[default]
    Mid,
    Senior,
    Lead,
    Principal,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 6] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
        ExperienceLevel::Principal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
            ExperienceLevel::Principal => "principal",
        }
    }

    /// Position on the seniority ladder, entry = 0.
    pub fn rank(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Excellent,
    Good,
    Average,
    Poor,
    Terrible,
}

impl QualityLevel {
    pub const ALL: [QualityLevel; 5] = [
        QualityLevel::Excellent,
        QualityLevel::Good,
        QualityLevel::Average,
        QualityLevel::Poor,
        QualityLevel::Terrible,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QualityLevel::Excellent => "excellent",
            QualityLevel::Good => "good",
            QualityLevel::Average => "average",
            QualityLevel::Poor => "poor",
            QualityLevel::Terrible => "terrible",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        QualityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or(())
    }
}

/// Fixed population splits for mixed-quality batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixedQualityMode {
    /// 60% good, 30% average, 10% bad (poor).
    Standard,
    /// 40% excellent, 30% good, 20% poor, 10% terrible.
    Spectrum,
}

impl MixedQualityMode {
    /// Buckets in order; the last bucket absorbs the floor-division remainder.
    pub fn buckets(self) -> &'static [(QualityLevel, u32)] {
        match self {
            MixedQualityMode::Standard => &[
                (QualityLevel::Good, 60),
                (QualityLevel::Average, 30),
                (QualityLevel::Poor, 10),
            ],
            MixedQualityMode::Spectrum => &[
                (QualityLevel::Excellent, 40),
                (QualityLevel::Good, 30),
                (QualityLevel::Poor, 20),
                (QualityLevel::Terrible, 10),
            ],
        }
    }
}

fn default_target_role() -> String {
    "Software Engineer".to_string()
}

fn default_count() -> u32 {
    1
}

/// Configuration input for candidate generation.
///
/// Unknown `experience_level` values parse as `mid`; unknown `quality_level`
/// values parse as absent, which means "pick a quality at random".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateGenerationParams {
    #[serde(default = "default_target_role")]
    pub target_role: String,
    #[serde(default, deserialize_with = "lenient_experience_level")]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub personality_archetype: Option<String>,
    #[serde(default)]
    pub technical_focus: Vec<String>,
    #[serde(default)]
    pub industry_background: Option<String>,
    #[serde(default)]
    pub location_preference: Option<String>,
    #[serde(default, deserialize_with = "lenient_quality_level")]
    pub quality_level: Option<QualityLevel>,
    #[serde(default)]
    pub mixed_quality: Option<MixedQualityMode>,
    #[serde(default)]
    pub flaws: Vec<String>,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub custom_requirements: Option<String>,
    #[serde(default)]
    pub use_ai_enhancement: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CandidateGenerationParams {
    fn default() -> Self {
        Self {
            target_role: default_target_role(),
            experience_level: ExperienceLevel::default(),
            personality_archetype: None,
            technical_focus: Vec::new(),
            industry_background: None,
            location_preference: None,
            quality_level: None,
            mixed_quality: None,
            flaws: Vec::new(),
            count: default_count(),
            custom_requirements: None,
            use_ai_enhancement: false,
            seed: None,
        }
    }
}

fn lenient_experience_level<'de, D>(deserializer: D) -> Result<ExperienceLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.parse::<ExperienceLevel>().ok())
        .unwrap_or_default())
}

fn lenient_quality_level<'de, D>(deserializer: D) -> Result<Option<QualityLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse::<QualityLevel>().ok()))
}
