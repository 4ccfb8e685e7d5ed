// Prompt constants for the enhancement adapter.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Role preamble for candidate enhancement. Combined with the shared JSON-only
/// and synthetic-persona fragments at call time.
pub const ENHANCE_ROLE: &str =
    "You are an experienced technical recruiter who writes realistic candidate backgrounds \
    for interview training exercises.";

/// Enhancement prompt template. Replace `{target_role}`, `{experience_level}`,
/// `{personality}`, `{technical_focus}`, `{industry}` and `{custom_requirements}`
/// before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Write a richer background for a fictional job candidate.

Candidate brief:
- Target role: {target_role}
- Experience level: {experience_level}
- Big Five personality (1-100): {personality}
- Technical focus: {technical_focus}
- Industry background: {industry}
- Additional requirements: {custom_requirements}

Return a JSON object with this EXACT schema (no extra fields):
{
  "background_summary": "Two or three sentences in the third person.",
  "personality": {
    "openness": 62,
    "conscientiousness": 71,
    "extraversion": 48,
    "agreeableness": 66,
    "neuroticism": 35
  },
  "key_strengths": ["Short phrase"],
  "potential_red_flags": ["Short phrase"]
}

Rules:
- Keep personality values within 1-100 and within 15 points of the brief unless the
  additional requirements say otherwise. Use null to keep the brief unchanged.
- key_strengths and potential_red_flags: at most 3 entries each, each under 12 words.
- The background must be consistent with the experience level and personality."#;
