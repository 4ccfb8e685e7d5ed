// Shared prompt fragments. Each service that calls the model keeps its own
// prompts.rs alongside it and builds on these.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps generated personas clearly fictional.
pub const SYNTHETIC_PERSONA_INSTRUCTION: &str = "\
    Every person you describe is fictional and used only for recruiter training. \
    Do NOT reference real people, real employers' confidential details, or \
    protected characteristics such as age, religion, health, or ethnicity.";
