//! External Enhancement Adapter: optional enrichment of a generated candidate.
//!
//! `CandidateEnhancer` is the seam: `LlmEnhancer` is the production backend,
//! tests inject fakes. Callers never see an enhancement failure; they go
//! through `enhance_or_fallback`, which returns the deterministic candidate
//! unchanged on error, timeout or a malformed profile.
//!
//! `AppState` holds an `Option<Arc<dyn CandidateEnhancer>>`, present only when
//! an API key is configured.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, SYNTHETIC_PERSONA_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::candidate::{Candidate, CandidateSource};
use crate::models::params::CandidateGenerationParams;
use crate::models::traits::PersonalityTraits;

pub mod prompts;

use prompts::{ENHANCE_PROMPT_TEMPLATE, ENHANCE_ROLE};

pub const AI_ENHANCED_TAG: &str = "ai-enhanced";

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

/// What an enhancer may contribute. Every field is optional or additive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancedProfile {
    #[serde(default)]
    pub background_summary: Option<String>,
    #[serde(default)]
    pub personality: Option<PersonalityTraits>,
    #[serde(default)]
    pub key_strengths: Vec<String>,
    #[serde(default)]
    pub potential_red_flags: Vec<String>,
}

impl EnhancedProfile {
    /// Rejects personality values outside [1, 100].
    pub fn validate(&self) -> Result<(), EnhancementError> {
        match &self.personality {
            Some(p) if !p.is_in_range() => Err(EnhancementError::Malformed(format!(
                "personality out of range: {:?}",
                p.as_array()
            ))),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Error)]
pub enum EnhancementError {
    #[error("Enhancement timed out after {0:?}")]
    Timeout(Duration),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Malformed enhancement: {0}")]
    Malformed(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait CandidateEnhancer: Send + Sync {
    async fn enhance(
        &self,
        personality: &PersonalityTraits,
        params: &CandidateGenerationParams,
    ) -> Result<EnhancedProfile, EnhancementError>;

    /// Backend name, logged with every fallback.
    fn name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEnhancer
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmEnhancer {
    llm: LlmClient,
}

impl LlmEnhancer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl CandidateEnhancer for LlmEnhancer {
    async fn enhance(
        &self,
        personality: &PersonalityTraits,
        params: &CandidateGenerationParams,
    ) -> Result<EnhancedProfile, EnhancementError> {
        let system = format!("{ENHANCE_ROLE} {JSON_ONLY_SYSTEM} {SYNTHETIC_PERSONA_INSTRUCTION}");
        let prompt = build_prompt(personality, params);
        let profile: EnhancedProfile = self.llm.call_json(&prompt, &system).await?;
        Ok(profile)
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}

fn build_prompt(personality: &PersonalityTraits, params: &CandidateGenerationParams) -> String {
    let personality = format!(
        "openness {}, conscientiousness {}, extraversion {}, agreeableness {}, neuroticism {}",
        personality.openness,
        personality.conscientiousness,
        personality.extraversion,
        personality.agreeableness,
        personality.neuroticism
    );
    let focus = if params.technical_focus.is_empty() {
        "general".to_string()
    } else {
        params.technical_focus.join(", ")
    };

    ENHANCE_PROMPT_TEMPLATE
        .replace("{target_role}", &params.target_role)
        .replace("{experience_level}", params.experience_level.as_str())
        .replace("{personality}", &personality)
        .replace("{technical_focus}", &focus)
        .replace(
            "{industry}",
            params.industry_background.as_deref().unwrap_or("unspecified"),
        )
        .replace(
            "{custom_requirements}",
            params.custom_requirements.as_deref().unwrap_or("none"),
        )
}

// ────────────────────────────────────────────────────────────────────────────
// Fallback combinator
// ────────────────────────────────────────────────────────────────────────────

/// Merges a validated profile into the candidate. Nothing else is re-derived
/// from an overwritten personality.
pub fn apply_enhancement(candidate: &mut Candidate, profile: EnhancedProfile) {
    if let Some(personality) = profile.personality {
        candidate.personality = personality;
    }
    if let Some(summary) = profile
        .background_summary
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    {
        candidate.personal_info.bio = Some(summary);
    }

    let performance = &mut candidate.interview_performance;
    merge_unique(&mut performance.key_strengths, profile.key_strengths);
    merge_unique(&mut performance.potential_red_flags, profile.potential_red_flags);

    candidate.metadata.source = CandidateSource::AiEnhanced;
    candidate.metadata.updated_at = Utc::now();
    if !candidate.has_tag(AI_ENHANCED_TAG) {
        candidate.add_tag(AI_ENHANCED_TAG);
    }
}

fn merge_unique(existing: &mut Vec<String>, incoming: Vec<String>) {
    for item in incoming {
        let item = item.trim().to_string();
        if !item.is_empty() && !existing.contains(&item) {
            existing.push(item);
        }
    }
}

/// Runs the enhancer under `timeout`. Any failure is logged and the
/// candidate comes back exactly as it went in.
pub async fn enhance_or_fallback(
    enhancer: &dyn CandidateEnhancer,
    mut candidate: Candidate,
    timeout: Duration,
) -> Candidate {
    let call = enhancer.enhance(
        &candidate.personality,
        &candidate.metadata.generation_params,
    );
    let result = match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(EnhancementError::Timeout(timeout)),
    };

    match result.and_then(|profile| profile.validate().map(|_| profile)) {
        Ok(profile) => {
            apply_enhancement(&mut candidate, profile);
            debug!(
                "Candidate {} enhanced by '{}' backend",
                candidate.id,
                enhancer.name()
            );
        }
        Err(e) => {
            warn!(
                "Enhancement via '{}' failed for candidate {}, keeping deterministic profile: {}",
                enhancer.name(),
                candidate.id,
                e
            );
        }
    }

    candidate
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::generation::assembler::assemble;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Always fails with an API error.
    pub(crate) struct FailingEnhancer;

    #[async_trait]
    impl CandidateEnhancer for FailingEnhancer {
        async fn enhance(
            &self,
            _: &PersonalityTraits,
            _: &CandidateGenerationParams,
        ) -> Result<EnhancedProfile, EnhancementError> {
            Err(EnhancementError::Llm(LlmError::Api {
                status: 500,
                message: "upstream unavailable".to_string(),
            }))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    /// Returns the same profile after `delay`.
    pub(crate) struct StaticEnhancer {
        pub profile: EnhancedProfile,
        pub delay: Duration,
    }

    #[async_trait]
    impl CandidateEnhancer for StaticEnhancer {
        async fn enhance(
            &self,
            _: &PersonalityTraits,
            _: &CandidateGenerationParams,
        ) -> Result<EnhancedProfile, EnhancementError> {
            tokio::time::sleep(self.delay).await;
            Ok(self.profile.clone())
        }

        fn name(&self) -> &'static str {
            "static"
        }
    }

    pub(crate) fn sample_profile() -> EnhancedProfile {
        EnhancedProfile {
            background_summary: Some("Spent six years building payment rails.".to_string()),
            personality: Some(PersonalityTraits::new(70, 72, 40, 66, 30)),
            key_strengths: vec!["Calm under pressure".to_string()],
            potential_red_flags: vec!["Vague about team size".to_string()],
        }
    }

    fn candidate() -> Candidate {
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        assemble(
            &CandidateGenerationParams::default(),
            now,
            &mut StdRng::seed_from_u64(11),
        )
    }

    #[tokio::test]
    async fn test_failing_enhancer_returns_baseline() {
        let baseline = candidate();
        let result =
            enhance_or_fallback(&FailingEnhancer, baseline.clone(), Duration::from_secs(5)).await;
        assert_eq!(result, baseline);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_enhancer_times_out_to_baseline() {
        let baseline = candidate();
        let slow = StaticEnhancer {
            profile: sample_profile(),
            delay: Duration::from_secs(60),
        };
        let result = enhance_or_fallback(&slow, baseline.clone(), Duration::from_secs(1)).await;
        assert_eq!(result, baseline);
        assert!(!result.has_tag(AI_ENHANCED_TAG));
    }

    #[tokio::test]
    async fn test_out_of_range_personality_is_rejected() {
        let baseline = candidate();
        let malformed = StaticEnhancer {
            profile: EnhancedProfile {
                personality: Some(PersonalityTraits::new(0, 50, 50, 50, 50)),
                ..sample_profile()
            },
            delay: Duration::ZERO,
        };
        let result =
            enhance_or_fallback(&malformed, baseline.clone(), Duration::from_secs(5)).await;
        assert_eq!(result, baseline);
    }

    #[tokio::test]
    async fn test_successful_enhancement_is_merged() {
        let baseline = candidate();
        let enhancer = StaticEnhancer {
            profile: sample_profile(),
            delay: Duration::ZERO,
        };
        let result = enhance_or_fallback(&enhancer, baseline.clone(), Duration::from_secs(5)).await;

        assert_eq!(result.id, baseline.id);
        assert_eq!(result.personality, PersonalityTraits::new(70, 72, 40, 66, 30));
        assert_eq!(
            result.personal_info.bio.as_deref(),
            Some("Spent six years building payment rails.")
        );
        assert_eq!(result.metadata.source, CandidateSource::AiEnhanced);
        assert!(result.has_tag(AI_ENHANCED_TAG));
        let perf = &result.interview_performance;
        assert!(perf.key_strengths.contains(&"Calm under pressure".to_string()));
        assert!(perf
            .potential_red_flags
            .contains(&"Vague about team size".to_string()));
        // Work behavior is not re-derived from the new personality.
        assert_eq!(result.work_behavior, baseline.work_behavior);
    }

    #[test]
    fn test_merge_skips_duplicates_and_blanks() {
        let mut existing = vec!["Reliable".to_string()];
        merge_unique(
            &mut existing,
            vec![
                "Reliable".to_string(),
                "  ".to_string(),
                " Curious ".to_string(),
            ],
        );
        assert_eq!(existing, vec!["Reliable", "Curious"]);
    }

    #[test]
    fn test_profile_parses_with_missing_fields() {
        let profile: EnhancedProfile =
            serde_json::from_str(r#"{"background_summary": "Ex-consultant."}"#).unwrap();
        assert!(profile.personality.is_none());
        assert!(profile.key_strengths.is_empty());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let params = CandidateGenerationParams {
            technical_focus: vec!["backend".to_string(), "data".to_string()],
            industry_background: Some("fintech".to_string()),
            ..Default::default()
        };
        let prompt = build_prompt(&PersonalityTraits::new(1, 2, 3, 4, 5), &params);
        assert!(prompt.contains("Target role: Software Engineer"));
        assert!(prompt.contains("Technical focus: backend, data"));
        assert!(prompt.contains("Industry background: fintech"));
        assert!(prompt.contains("neuroticism 5"));
        for placeholder in ["{target_role}", "{personality}", "{industry}", "{custom_requirements}"] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }
}
