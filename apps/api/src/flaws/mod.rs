// Flaw injection subsystem.
// Implements: the flaw library, per-flaw mutators, and quality-level degradation.

pub mod library;
pub mod mutators;
pub mod quality;
