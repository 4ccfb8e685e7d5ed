use serde::{Deserialize, Serialize};

/// Interview sub-scores live in [1, 10]; every writer clamps to that range.
pub const SCORE_MIN: u8 = 1;
pub const SCORE_MAX: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehavioralScores {
    pub overall: u8,
    pub communication: u8,
    pub problem_solving: u8,
    pub leadership: u8,
    pub teamwork: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalScores {
    pub coding: u8,
    pub system_design: u8,
    pub troubleshooting: u8,
    pub best_practices: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalScores {
    pub company_fit: u8,
    pub values_alignment: u8,
    pub collaboration: u8,
    pub innovation: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewScores {
    pub behavioral: BehavioralScores,
    pub technical: TechnicalScores,
    pub cultural: CulturalScores,
}

/// The three top-level score groups. Flaw impacts and quality multipliers
/// address these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGroup {
    Behavioral,
    Technical,
    Cultural,
}

impl InterviewScores {
    pub fn group_mut(&mut self, group: ScoreGroup) -> Vec<&mut u8> {
        match group {
            ScoreGroup::Behavioral => {
                let b = &mut self.behavioral;
                vec![
                    &mut b.overall,
                    &mut b.communication,
                    &mut b.problem_solving,
                    &mut b.leadership,
                    &mut b.teamwork,
                ]
            }
            ScoreGroup::Technical => {
                let t = &mut self.technical;
                vec![
                    &mut t.coding,
                    &mut t.system_design,
                    &mut t.troubleshooting,
                    &mut t.best_practices,
                ]
            }
            ScoreGroup::Cultural => {
                let c = &mut self.cultural;
                vec![
                    &mut c.company_fit,
                    &mut c.values_alignment,
                    &mut c.collaboration,
                    &mut c.innovation,
                ]
            }
        }
    }

    pub fn group_values(&self, group: ScoreGroup) -> Vec<u8> {
        match group {
            ScoreGroup::Behavioral => {
                let b = &self.behavioral;
                vec![
                    b.overall,
                    b.communication,
                    b.problem_solving,
                    b.leadership,
                    b.teamwork,
                ]
            }
            ScoreGroup::Technical => {
                let t = &self.technical;
                vec![
                    t.coding,
                    t.system_design,
                    t.troubleshooting,
                    t.best_practices,
                ]
            }
            ScoreGroup::Cultural => {
                let c = &self.cultural;
                vec![
                    c.company_fit,
                    c.values_alignment,
                    c.collaboration,
                    c.innovation,
                ]
            }
        }
    }

    /// Mean of the three group means.
    pub fn overall_mean(&self) -> f64 {
        let groups = [
            ScoreGroup::Behavioral,
            ScoreGroup::Technical,
            ScoreGroup::Cultural,
        ];
        let sum: f64 = groups
            .iter()
            .map(|g| {
                let values = self.group_values(*g);
                values.iter().map(|v| *v as f64).sum::<f64>() / values.len() as f64
            })
            .sum();
        sum / groups.len() as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStructure {
    Star,
    Structured,
    Concise,
    Rambling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorytellingStyle {
    Narrative,
    Technical,
    FactBased,
    Anecdotal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePatterns {
    pub answer_structure: AnswerStructure,
    pub storytelling_style: StorytellingStyle,
    pub enthusiasm_level: Level,
    pub self_awareness: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewPerformance {
    pub simulated_interview_scores: InterviewScores,
    pub response_patterns: ResponsePatterns,
    pub potential_red_flags: Vec<String>,
    pub key_strengths: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_scores(v: u8) -> InterviewScores {
        InterviewScores {
            behavioral: BehavioralScores {
                overall: v,
                communication: v,
                problem_solving: v,
                leadership: v,
                teamwork: v,
            },
            technical: TechnicalScores {
                coding: v,
                system_design: v,
                troubleshooting: v,
                best_practices: v,
            },
            cultural: CulturalScores {
                company_fit: v,
                values_alignment: v,
                collaboration: v,
                innovation: v,
            },
        }
    }

    #[test]
    fn test_group_mut_touches_only_that_group() {
        let mut scores = flat_scores(6);
        for s in scores.group_mut(ScoreGroup::Technical) {
            *s = 2;
        }
        assert_eq!(scores.group_values(ScoreGroup::Technical), vec![2, 2, 2, 2]);
        assert_eq!(scores.behavioral.overall, 6);
        assert_eq!(scores.cultural.innovation, 6);
    }

    #[test]
    fn test_overall_mean_weights_groups_equally() {
        let mut scores = flat_scores(4);
        for s in scores.group_mut(ScoreGroup::Cultural) {
            *s = 10;
        }
        assert!((scores.overall_mean() - 6.0).abs() < 1e-9);
    }
}
