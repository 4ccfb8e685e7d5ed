//! Trait generation: jittered personality around an archetype baseline, and an
//! independent cognitive profile.

use rand::Rng;

use crate::generation::archetypes::Archetype;
use crate::models::traits::{CognitiveProfile, PersonalityTraits, TRAIT_MAX, TRAIT_MIN};

/// Half-width of the jitter window per dimension, in OCEAN order.
/// Extraversion deliberately varies the most.
pub const JITTER: [i32; 5] = [15, 10, 20, 15, 15];

const COGNITIVE_MIN: u8 = 3;
const COGNITIVE_MAX: u8 = 10;

pub fn generate_traits<R: Rng + ?Sized>(archetype: &Archetype, rng: &mut R) -> PersonalityTraits {
    let b = archetype.baseline;
    PersonalityTraits {
        openness: jitter(b.openness, JITTER[0], rng),
        conscientiousness: jitter(b.conscientiousness, JITTER[1], rng),
        extraversion: jitter(b.extraversion, JITTER[2], rng),
        agreeableness: jitter(b.agreeableness, JITTER[3], rng),
        neuroticism: jitter(b.neuroticism, JITTER[4], rng),
    }
}

fn jitter<R: Rng + ?Sized>(base: u8, width: i32, rng: &mut R) -> u8 {
    let value = base as i32 + rng.gen_range(-width..=width);
    clamp_trait(value)
}

pub fn clamp_trait(value: i32) -> u8 {
    value.clamp(TRAIT_MIN as i32, TRAIT_MAX as i32) as u8
}

/// Draws a trait value uniformly from an inclusive range (used by flaw mutators).
pub fn trait_in<R: Rng + ?Sized>(low: u8, high: u8, rng: &mut R) -> u8 {
    clamp_trait(rng.gen_range(low as i32..=high as i32))
}

pub fn generate_cognitive<R: Rng + ?Sized>(rng: &mut R) -> CognitiveProfile {
    let mut draw = || rng.gen_range(COGNITIVE_MIN..=COGNITIVE_MAX);
    CognitiveProfile {
        logical_reasoning: draw(),
        creative_thinking: draw(),
        social_intelligence: draw(),
        abstract_reasoning: draw(),
        verbal_communication: draw(),
        quantitative_ability: draw(),
    }
}
