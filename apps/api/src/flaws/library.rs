use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::performance::ScoreGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlawType {
    SkillExaggeration,
    PoorCommunication,
    ToxicPersonality,
    JobHopper,
    SkillGaps,
    CulturalMisfit,
    LazyWorker,
    ArrogantAttitude,
    Unreliable,
    ResistantToFeedback,
    PoorProblemSolving,
    AttentionIssues,
}

impl FlawType {
    pub fn as_str(self) -> &'static str {
        match self {
            FlawType::SkillExaggeration => "skill-exaggeration",
            FlawType::PoorCommunication => "poor-communication",
            FlawType::ToxicPersonality => "toxic-personality",
            FlawType::JobHopper => "job-hopper",
            FlawType::SkillGaps => "skill-gaps",
            FlawType::CulturalMisfit => "cultural-misfit",
            FlawType::LazyWorker => "lazy-worker",
            FlawType::ArrogantAttitude => "arrogant-attitude",
            FlawType::Unreliable => "unreliable",
            FlawType::ResistantToFeedback => "resistant-to-feedback",
            FlawType::PoorProblemSolving => "poor-problem-solving",
            FlawType::AttentionIssues => "attention-issues",
        }
    }

    pub fn definition(self) -> &'static FlawDefinition {
        FLAW_LIBRARY
            .iter()
            .find(|d| d.flaw_type == self)
            .unwrap_or(&FLAW_LIBRARY[0])
    }
}

impl fmt::Display for FlawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlawType {
    type Err = ();

    /// Accepts kebab, snake, or spaced spellings in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c })
            .collect();
        FLAW_LIBRARY
            .iter()
            .map(|d| d.flaw_type)
            .find(|t| t.as_str() == normalized)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// Score deltas (never positive) subtracted from each sub-score of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreImpact {
    pub technical: i8,
    pub behavioral: i8,
    pub cultural: i8,
}

impl ScoreImpact {
    pub fn for_group(&self, group: ScoreGroup) -> i8 {
        match group {
            ScoreGroup::Technical => self.technical,
            ScoreGroup::Behavioral => self.behavioral,
            ScoreGroup::Cultural => self.cultural,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlawDefinition {
    pub flaw_type: FlawType,
    pub severity: Severity,
    pub description: &'static str,
    pub impact: ScoreImpact,
}

const fn impact(technical: i8, behavioral: i8, cultural: i8) -> ScoreImpact {
    ScoreImpact {
        technical,
        behavioral,
        cultural,
    }
}

pub static FLAW_LIBRARY: [FlawDefinition; 12] = [
    FlawDefinition {
        flaw_type: FlawType::SkillExaggeration,
        severity: Severity::Severe,
        description: "Claims years of experience that the demonstrated skill level does not support",
        impact: impact(-3, -1, -1),
    },
    FlawDefinition {
        flaw_type: FlawType::PoorCommunication,
        severity: Severity::Moderate,
        description: "Struggles to explain ideas clearly or answer questions directly",
        impact: impact(0, -3, -1),
    },
    FlawDefinition {
        flaw_type: FlawType::ToxicPersonality,
        severity: Severity::Severe,
        description: "Hostile, volatile behavior that damages team dynamics",
        impact: impact(0, -3, -4),
    },
    FlawDefinition {
        flaw_type: FlawType::JobHopper,
        severity: Severity::Moderate,
        description: "Pattern of short tenures and abrupt departures",
        impact: impact(0, -1, -2),
    },
    FlawDefinition {
        flaw_type: FlawType::SkillGaps,
        severity: Severity::Moderate,
        description: "Missing fundamentals expected for the role",
        impact: impact(-3, 0, 0),
    },
    FlawDefinition {
        flaw_type: FlawType::CulturalMisfit,
        severity: Severity::Mild,
        description: "Working style and values diverge from team norms",
        impact: impact(0, -1, -3),
    },
    FlawDefinition {
        flaw_type: FlawType::LazyWorker,
        severity: Severity::Moderate,
        description: "Low effort and little ownership of outcomes",
        impact: impact(-1, -2, -2),
    },
    FlawDefinition {
        flaw_type: FlawType::ArrogantAttitude,
        severity: Severity::Moderate,
        description: "Dismissive of others and overconfident in own judgment",
        impact: impact(0, -2, -3),
    },
    FlawDefinition {
        flaw_type: FlawType::Unreliable,
        severity: Severity::Moderate,
        description: "Misses commitments and has unexplained gaps in employment",
        impact: impact(-1, -2, -1),
    },
    FlawDefinition {
        flaw_type: FlawType::ResistantToFeedback,
        severity: Severity::Mild,
        description: "Becomes defensive when given feedback and rarely adapts",
        impact: impact(0, -2, -2),
    },
    FlawDefinition {
        flaw_type: FlawType::PoorProblemSolving,
        severity: Severity::Moderate,
        description: "Cannot break down unfamiliar problems or debug systematically",
        impact: impact(-3, -2, 0),
    },
    FlawDefinition {
        flaw_type: FlawType::AttentionIssues,
        severity: Severity::Mild,
        description: "Loses focus and overlooks details under load",
        impact: impact(-2, -1, 0),
    },
];
