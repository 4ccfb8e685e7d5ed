//! Quality-level degradation.
//!
//! A quality level scales interview scores, swaps in a problematic
//! personality for poor/terrible candidates, and decides how many random
//! flaws to inject.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::flaws::library::{FlawType, FLAW_LIBRARY};
use crate::flaws::mutators::apply_flaw;
use crate::generation::archetypes::random_problematic;
use crate::generation::interview::reassess;
use crate::models::candidate::Candidate;
use crate::models::params::QualityLevel;
use crate::models::performance::{ScoreGroup, SCORE_MAX, SCORE_MIN};

/// Weights used when no quality level is requested.
const AUTO_QUALITY_WEIGHTS: [(QualityLevel, u32); 5] = [
    (QualityLevel::Excellent, 10),
    (QualityLevel::Good, 30),
    (QualityLevel::Average, 30),
    (QualityLevel::Poor, 20),
    (QualityLevel::Terrible, 10),
];

pub fn score_multiplier(quality: QualityLevel) -> f64 {
    match quality {
        QualityLevel::Excellent => 1.0,
        QualityLevel::Good => 0.85,
        QualityLevel::Average => 0.65,
        QualityLevel::Poor => 0.4,
        QualityLevel::Terrible => 0.2,
    }
}

pub fn flaw_count(quality: QualityLevel) -> usize {
    match quality {
        QualityLevel::Excellent | QualityLevel::Good => 0,
        QualityLevel::Average => 1,
        QualityLevel::Poor => 2,
        QualityLevel::Terrible => 4,
    }
}

/// Returns the requested level, or draws one from the mixed-quality weights.
pub fn resolve_quality<R: Rng + ?Sized>(requested: Option<QualityLevel>, rng: &mut R) -> QualityLevel {
    requested.unwrap_or_else(|| {
        AUTO_QUALITY_WEIGHTS
            .choose_weighted(rng, |(_, weight)| *weight)
            .map(|(level, _)| *level)
            .unwrap_or(QualityLevel::Average)
    })
}

/// Scales every interview sub-score by the quality multiplier, rounding and
/// clamping to [1, 10]. Poor and terrible candidates also take on a random
/// problematic archetype's exact baseline and behavior preset, and their
/// flags, strengths and response patterns are re-derived from it.
///
/// The archetype is drawn at every level so that the generator advances the
/// same way whatever the quality.
pub fn degrade_by_quality<R: Rng + ?Sized>(
    candidate: &mut Candidate,
    quality: QualityLevel,
    rng: &mut R,
) {
    let multiplier = score_multiplier(quality);
    let scores = &mut candidate.interview_performance.simulated_interview_scores;
    for group in [
        ScoreGroup::Behavioral,
        ScoreGroup::Technical,
        ScoreGroup::Cultural,
    ] {
        for score in scores.group_mut(group) {
            let scaled = (*score as f64 * multiplier).round() as i32;
            *score = scaled.clamp(SCORE_MIN as i32, SCORE_MAX as i32) as u8;
        }
    }

    let archetype = random_problematic(rng);
    if matches!(quality, QualityLevel::Poor | QualityLevel::Terrible) {
        candidate.personality = archetype.baseline;
        candidate.work_behavior = archetype.behavior;
        reassess(
            &candidate.personality,
            &candidate.cognitive_profile,
            &mut candidate.interview_performance,
        );
        candidate.add_tag(archetype.name);
    }

    candidate.add_tag(quality.as_str());
}

/// Picks `flaw_count(quality)` distinct flaw types: the head of one shuffle
/// of the whole library. From the same generator state, a lower level's
/// flaws always include every flaw of a higher level.
pub fn select_flaws<R: Rng + ?Sized>(quality: QualityLevel, rng: &mut R) -> Vec<FlawType> {
    let mut order: Vec<FlawType> = FLAW_LIBRARY.iter().map(|d| d.flaw_type).collect();
    order.shuffle(rng);
    order.truncate(flaw_count(quality));
    order
}

/// Selects flaws for the quality level and applies each one.
pub fn auto_select_flaws<R: Rng + ?Sized>(
    candidate: &mut Candidate,
    quality: QualityLevel,
    rng: &mut R,
) -> Vec<FlawType> {
    let flaws = select_flaws(quality, rng);
    for flaw in &flaws {
        apply_flaw(candidate, *flaw, rng);
    }
    flaws
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::archetypes::{ArchetypePool, PROBLEMATIC};
    use crate::generation::assembler::assemble;
    use crate::models::params::CandidateGenerationParams;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn candidate(seed: u64) -> Candidate {
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        assemble(
            &CandidateGenerationParams::default(),
            now,
            &mut StdRng::seed_from_u64(seed),
        )
    }

    fn degraded_mean(seed: u64, quality: QualityLevel) -> f64 {
        let mut c = candidate(seed);
        degrade_by_quality(&mut c, quality, &mut StdRng::seed_from_u64(seed));
        c.interview_performance
            .simulated_interview_scores
            .overall_mean()
    }

    #[test]
    fn test_degradation_is_monotonic_in_quality() {
        for seed in 0..50 {
            let means: Vec<f64> = QualityLevel::ALL
                .iter()
                .map(|q| degraded_mean(seed, *q))
                .collect();
            for pair in means.windows(2) {
                assert!(pair[1] <= pair[0], "seed {seed}: {means:?}");
            }
        }
    }

    #[test]
    fn test_excellent_keeps_scores() {
        let mut c = candidate(3);
        let before = c.interview_performance.simulated_interview_scores;
        degrade_by_quality(&mut c, QualityLevel::Excellent, &mut StdRng::seed_from_u64(3));
        assert_eq!(c.interview_performance.simulated_interview_scores, before);
        assert!(c.has_tag("excellent"));
    }

    #[test]
    fn test_terrible_scores_floor_at_one() {
        let mut c = candidate(4);
        degrade_by_quality(&mut c, QualityLevel::Terrible, &mut StdRng::seed_from_u64(4));
        let s = c.interview_performance.simulated_interview_scores;
        for group in [
            ScoreGroup::Behavioral,
            ScoreGroup::Technical,
            ScoreGroup::Cultural,
        ] {
            assert!(s.group_values(group).iter().all(|v| (1..=2).contains(v)));
        }
    }

    #[test]
    fn test_poor_and_terrible_swap_in_problematic_personality() {
        for quality in [QualityLevel::Poor, QualityLevel::Terrible] {
            let mut c = candidate(5);
            degrade_by_quality(&mut c, quality, &mut StdRng::seed_from_u64(6));
            let source = PROBLEMATIC
                .iter()
                .find(|a| a.baseline == c.personality)
                .expect("personality should be a problematic baseline");
            assert_eq!(source.pool, ArchetypePool::Problematic);
            assert_eq!(c.work_behavior, source.behavior);
            assert!(c.has_tag(source.name));
        }
    }

    #[test]
    fn test_swapped_personality_is_reassessed() {
        use crate::generation::interview::{FLAG_STRESS, STRENGTH_CREATIVE};

        let params = CandidateGenerationParams {
            personality_archetype: Some("innovator".to_string()),
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        for seed in 0..200 {
            let mut c = assemble(&params, now, &mut StdRng::seed_from_u64(seed));
            degrade_by_quality(&mut c, QualityLevel::Terrible, &mut StdRng::seed_from_u64(seed));
            let perf = &c.interview_performance;
            let creative = perf.key_strengths.iter().any(|s| s == STRENGTH_CREATIVE);
            let stressed = perf.potential_red_flags.iter().any(|f| f == FLAG_STRESS);
            assert_eq!(creative, c.personality.openness > 80, "seed {seed}");
            assert_eq!(stressed, c.personality.neuroticism > 70, "seed {seed}");
        }
    }

    #[test]
    fn test_lower_quality_flaws_extend_higher() {
        for seed in 0..50 {
            let pick = |q| select_flaws(q, &mut StdRng::seed_from_u64(seed));
            let average = pick(QualityLevel::Average);
            let poor = pick(QualityLevel::Poor);
            let terrible = pick(QualityLevel::Terrible);
            assert_eq!(poor[..1], average[..]);
            assert_eq!(terrible[..2], poor[..]);
        }
    }

    #[test]
    fn test_average_keeps_personality() {
        let mut c = candidate(7);
        let personality = c.personality;
        degrade_by_quality(&mut c, QualityLevel::Average, &mut StdRng::seed_from_u64(7));
        assert_eq!(c.personality, personality);
    }

    #[test]
    fn test_flaw_counts_per_quality() {
        let mut rng = StdRng::seed_from_u64(8);
        for (quality, expected) in [
            (QualityLevel::Excellent, 0),
            (QualityLevel::Good, 0),
            (QualityLevel::Average, 1),
            (QualityLevel::Poor, 2),
            (QualityLevel::Terrible, 4),
        ] {
            let flaws = select_flaws(quality, &mut rng);
            assert_eq!(flaws.len(), expected);
            let unique: HashSet<_> = flaws.iter().collect();
            assert_eq!(unique.len(), expected, "flaws must not repeat");
        }
    }

    #[test]
    fn test_auto_select_applies_every_selected_flaw() {
        let mut c = candidate(9);
        let applied = auto_select_flaws(&mut c, QualityLevel::Terrible, &mut StdRng::seed_from_u64(9));
        assert_eq!(applied.len(), 4);
        for flaw in applied {
            assert!(c.has_tag(flaw.as_str()));
        }
        assert!(c.interview_performance.potential_red_flags.len() >= 4);
    }

    #[test]
    fn test_resolve_quality_prefers_request() {
        let mut rng = StdRng::seed_from_u64(10);
        assert_eq!(
            resolve_quality(Some(QualityLevel::Poor), &mut rng),
            QualityLevel::Poor
        );
        let drawn: HashSet<QualityLevel> =
            (0..500).map(|_| resolve_quality(None, &mut rng)).collect();
        assert_eq!(drawn.len(), QualityLevel::ALL.len());
    }
}
