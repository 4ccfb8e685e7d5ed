// Candidate generation engine.
// Implements: archetype baselines, trait jitter, behavior rules, skill and career
// synthesis, interview scoring, and the end-to-end assembler.
// Pure computation only; the enhancement adapter lives in `enhancement`.

pub mod archetypes;
pub mod assembler;
pub mod behavior;
pub mod career;
pub mod handlers;
pub mod interview;
pub mod skills;
pub mod traits;
