//! Batch Orchestrator: many independent candidates from one request.
//!
//! Every slot gets its quality level from the plan and its own sub-seed from
//! the master generator before any work is scheduled, so a seeded batch is
//! identical at any concurrency cap. Slots run under a semaphore; a cap of 1
//! runs them inline. The finished pool is shuffled so order carries no
//! quality signal.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::enhancement::{enhance_or_fallback, CandidateEnhancer};
use crate::generation::assembler::{generate, seeded_rng};
use crate::models::candidate::Candidate;
use crate::models::params::{CandidateGenerationParams, MixedQualityMode, QualityLevel};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Maximum slots in flight. Values below 1 are treated as 1.
    pub concurrency: usize,
    pub enhancement_timeout: Duration,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            concurrency: 1,
            enhancement_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub candidates: Vec<Candidate>,
    pub requested: u32,
    pub cancelled: bool,
    /// Candidates per resolved quality level.
    pub distribution: BTreeMap<QualityLevel, u32>,
}

/// Slots per bucket, in declaration order. Each bucket gets
/// `count * pct / 100` (floor); the last bucket takes whatever is left.
pub fn bucket_sizes(count: u32, mode: MixedQualityMode) -> Vec<(QualityLevel, u32)> {
    let buckets = mode.buckets();
    let mut remaining = count;
    let mut sizes = Vec::with_capacity(buckets.len());
    for (i, &(quality, pct)) in buckets.iter().enumerate() {
        let n = if i + 1 == buckets.len() {
            remaining
        } else {
            (u64::from(count) * u64::from(pct) / 100) as u32
        };
        remaining -= n;
        sizes.push((quality, n));
    }
    sizes
}

/// Quality level for each of `count` slots, grouped by bucket.
pub fn plan_qualities(count: u32, mode: MixedQualityMode) -> Vec<QualityLevel> {
    let mut plan = Vec::with_capacity(count as usize);
    for (quality, n) in bucket_sizes(count, mode) {
        plan.extend(std::iter::repeat(quality).take(n as usize));
    }
    plan
}

/// Generates `params.count` candidates. Enhancement runs only when
/// `params.use_ai_enhancement` is set and an enhancer is supplied.
pub async fn generate_batch(
    params: &CandidateGenerationParams,
    options: &BatchOptions,
    enhancer: Option<Arc<dyn CandidateEnhancer>>,
    cancel: &CancellationToken,
) -> BatchOutcome {
    run_batch(params, options, enhancer, cancel, Utc::now()).await
}

async fn run_batch(
    params: &CandidateGenerationParams,
    options: &BatchOptions,
    enhancer: Option<Arc<dyn CandidateEnhancer>>,
    cancel: &CancellationToken,
    now: DateTime<Utc>,
) -> BatchOutcome {
    let count = params.count;
    let mut master = seeded_rng(params.seed);

    let qualities: Vec<Option<QualityLevel>> = match params.mixed_quality {
        Some(mode) => plan_qualities(count, mode).into_iter().map(Some).collect(),
        None => vec![params.quality_level; count as usize],
    };
    let slots: Vec<CandidateGenerationParams> = qualities
        .into_iter()
        .map(|quality| slot_params(params, quality, master.gen()))
        .collect();

    let enhancer = enhancer.filter(|_| params.use_ai_enhancement);
    let concurrency = options.concurrency.max(1);

    info!(
        "Generating batch of {} (concurrency {}, mixed {:?}, enhancement {})",
        count,
        concurrency,
        params.mixed_quality,
        enhancer.as_ref().map(|e| e.name()).unwrap_or("off")
    );

    let finished = if concurrency == 1 {
        run_sequential(slots, enhancer, options.enhancement_timeout, cancel, now).await
    } else {
        run_parallel(
            slots,
            concurrency,
            enhancer,
            options.enhancement_timeout,
            cancel,
            now,
        )
        .await
    };

    let mut candidates: Vec<Candidate> = finished.into_iter().flatten().collect();
    candidates.shuffle(&mut master);

    let mut distribution = BTreeMap::new();
    for candidate in &candidates {
        if let Some(quality) = candidate.metadata.generation_params.quality_level {
            *distribution.entry(quality).or_insert(0) += 1;
        }
    }

    let cancelled = cancel.is_cancelled() && candidates.len() < count as usize;
    info!(
        "Batch finished: {}/{} candidates{}",
        candidates.len(),
        count,
        if cancelled { " (cancelled)" } else { "" }
    );

    BatchOutcome {
        candidates,
        requested: count,
        cancelled,
        distribution,
    }
}

/// Per-slot copy of the request. The stored seed lets any single candidate
/// be regenerated on its own.
fn slot_params(
    params: &CandidateGenerationParams,
    quality: Option<QualityLevel>,
    seed: u64,
) -> CandidateGenerationParams {
    CandidateGenerationParams {
        quality_level: quality,
        mixed_quality: None,
        count: 1,
        seed: Some(seed),
        ..params.clone()
    }
}

/// One slot: deterministic generation, then optional enhancement. Returns
/// `None` if cancelled before or during enhancement.
async fn produce(
    params: CandidateGenerationParams,
    enhancer: Option<Arc<dyn CandidateEnhancer>>,
    timeout: Duration,
    cancel: CancellationToken,
    now: DateTime<Utc>,
) -> Option<Candidate> {
    if cancel.is_cancelled() {
        return None;
    }
    let seed = params.seed.unwrap_or_default();
    let candidate = generate(&params, now, &mut StdRng::seed_from_u64(seed));
    debug!("Slot seed {} produced candidate {}", seed, candidate.id);

    match enhancer {
        Some(enhancer) => tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            enhanced = enhance_or_fallback(enhancer.as_ref(), candidate, timeout) => Some(enhanced),
        },
        None => Some(candidate),
    }
}

/// Runs slots one after another on the calling task. A slot without an
/// enhancer never awaits, so the loop yields after each one to let other
/// requests sharing the worker make progress. One slot's generation is short
/// enough that moving it to the blocking pool is not worth the hand-off.
async fn run_sequential(
    slots: Vec<CandidateGenerationParams>,
    enhancer: Option<Arc<dyn CandidateEnhancer>>,
    timeout: Duration,
    cancel: &CancellationToken,
    now: DateTime<Utc>,
) -> Vec<Option<Candidate>> {
    let mut finished = Vec::with_capacity(slots.len());
    for params in slots {
        if cancel.is_cancelled() {
            break;
        }
        finished.push(produce(params, enhancer.clone(), timeout, cancel.clone(), now).await);
        tokio::task::yield_now().await;
    }
    finished
}

async fn run_parallel(
    slots: Vec<CandidateGenerationParams>,
    concurrency: usize,
    enhancer: Option<Arc<dyn CandidateEnhancer>>,
    timeout: Duration,
    cancel: &CancellationToken,
    now: DateTime<Utc>,
) -> Vec<Option<Candidate>> {
    let semaphore = Arc::new(Semaphore::new(concurrency));

    let mut handles = Vec::with_capacity(slots.len());
    for params in slots {
        let sem = Arc::clone(&semaphore);
        let enhancer = enhancer.clone();
        let cancel = cancel.clone();

        handles.push(tokio::spawn(async move {
            let _permit = tokio::select! {
                biased;
                _ = cancel.cancelled() => return None,
                permit = sem.acquire() => match permit {
                    Ok(p) => p,
                    Err(_) => {
                        error!("Semaphore closed for slot seed {:?}", params.seed);
                        return None;
                    }
                },
            };
            produce(params, enhancer, timeout, cancel, now).await
        }));
    }

    let mut finished = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(candidate) => finished.push(candidate),
            Err(e) => {
                error!("Batch slot panicked: {}", e);
                finished.push(None);
            }
        }
    }
    finished
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enhancement::tests::{sample_profile, FailingEnhancer, StaticEnhancer};
    use crate::enhancement::AI_ENHANCED_TAG;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap()
    }

    fn options(concurrency: usize) -> BatchOptions {
        BatchOptions {
            concurrency,
            enhancement_timeout: Duration::from_secs(60),
        }
    }

    fn quality_of(c: &Candidate) -> QualityLevel {
        c.metadata.generation_params.quality_level.unwrap()
    }

    #[test]
    fn test_plan_standard_split() {
        let plan = plan_qualities(100, MixedQualityMode::Standard);
        assert_eq!(plan.len(), 100);
        let count = |q| plan.iter().filter(|p| **p == q).count();
        assert_eq!(count(QualityLevel::Good), 60);
        assert_eq!(count(QualityLevel::Average), 30);
        assert_eq!(count(QualityLevel::Poor), 10);
    }

    #[test]
    fn test_plan_spectrum_split() {
        let plan = plan_qualities(10, MixedQualityMode::Spectrum);
        assert_eq!(
            plan,
            vec![
                QualityLevel::Excellent,
                QualityLevel::Excellent,
                QualityLevel::Excellent,
                QualityLevel::Excellent,
                QualityLevel::Good,
                QualityLevel::Good,
                QualityLevel::Good,
                QualityLevel::Poor,
                QualityLevel::Poor,
                QualityLevel::Terrible,
            ]
        );
    }

    #[test]
    fn test_plan_remainder_goes_to_last_bucket() {
        let standard = plan_qualities(7, MixedQualityMode::Standard);
        let count = |plan: &[QualityLevel], q| plan.iter().filter(|p| **p == q).count();
        assert_eq!(count(&standard, QualityLevel::Good), 4);
        assert_eq!(count(&standard, QualityLevel::Average), 2);
        assert_eq!(count(&standard, QualityLevel::Poor), 1);

        let spectrum = plan_qualities(7, MixedQualityMode::Spectrum);
        assert_eq!(count(&spectrum, QualityLevel::Excellent), 2);
        assert_eq!(count(&spectrum, QualityLevel::Good), 2);
        assert_eq!(count(&spectrum, QualityLevel::Poor), 1);
        assert_eq!(count(&spectrum, QualityLevel::Terrible), 2);
    }

    #[test]
    fn test_bucket_sizes_do_not_overflow_large_counts() {
        let sizes = bucket_sizes(u32::MAX, MixedQualityMode::Standard);
        assert_eq!(
            sizes,
            vec![
                (QualityLevel::Good, 2_576_980_377),
                (QualityLevel::Average, 1_288_490_188),
                (QualityLevel::Poor, 429_496_730),
            ]
        );
        assert_eq!(sizes.iter().map(|(_, n)| u64::from(*n)).sum::<u64>(), u64::from(u32::MAX));
    }

    #[tokio::test]
    async fn test_sequential_batch_yields_to_other_tasks() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        tokio::spawn(async move { flag.store(true, Ordering::SeqCst) });

        let params = CandidateGenerationParams {
            count: 3,
            seed: Some(5),
            ..Default::default()
        };
        let outcome = run_batch(&params, &options(1), None, &CancellationToken::new(), now()).await;

        assert_eq!(outcome.candidates.len(), 3);
        assert!(ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_mixed_batch_composition_and_shuffle() {
        let params = CandidateGenerationParams {
            count: 100,
            mixed_quality: Some(MixedQualityMode::Standard),
            seed: Some(2024),
            ..Default::default()
        };
        let outcome = run_batch(&params, &options(4), None, &CancellationToken::new(), now()).await;

        assert_eq!(outcome.candidates.len(), 100);
        assert!(!outcome.cancelled);
        assert_eq!(outcome.distribution[&QualityLevel::Good], 60);
        assert_eq!(outcome.distribution[&QualityLevel::Average], 30);
        assert_eq!(outcome.distribution[&QualityLevel::Poor], 10);

        // Grouped output would change quality exactly twice.
        let qualities: Vec<QualityLevel> = outcome.candidates.iter().map(quality_of).collect();
        let transitions = qualities.windows(2).filter(|w| w[0] != w[1]).count();
        assert!(transitions > 2, "output looks grouped: {qualities:?}");
    }

    #[tokio::test]
    async fn test_uniform_batch_uses_requested_quality() {
        let params = CandidateGenerationParams {
            count: 5,
            quality_level: Some(QualityLevel::Poor),
            seed: Some(1),
            ..Default::default()
        };
        let outcome = run_batch(&params, &options(2), None, &CancellationToken::new(), now()).await;
        assert_eq!(outcome.candidates.len(), 5);
        assert!(outcome
            .candidates
            .iter()
            .all(|c| quality_of(c) == QualityLevel::Poor));
        assert_eq!(outcome.distribution.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrency_does_not_change_seeded_output() {
        let params = CandidateGenerationParams {
            count: 12,
            mixed_quality: Some(MixedQualityMode::Spectrum),
            seed: Some(77),
            ..Default::default()
        };
        let sequential =
            run_batch(&params, &options(1), None, &CancellationToken::new(), now()).await;
        let parallel =
            run_batch(&params, &options(6), None, &CancellationToken::new(), now()).await;
        assert_eq!(sequential.candidates, parallel.candidates);
    }

    #[tokio::test]
    async fn test_slot_candidate_regenerates_from_stored_seed() {
        let params = CandidateGenerationParams {
            count: 3,
            seed: Some(5),
            ..Default::default()
        };
        let outcome = run_batch(&params, &options(1), None, &CancellationToken::new(), now()).await;
        for c in &outcome.candidates {
            let stored = &c.metadata.generation_params;
            let replay = generate(
                stored,
                now(),
                &mut StdRng::seed_from_u64(stored.seed.unwrap()),
            );
            assert_eq!(replay.id, c.id);
            assert_eq!(replay.personal_info, c.personal_info);
        }
    }

    #[tokio::test]
    async fn test_cancelled_before_start_returns_nothing() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let params = CandidateGenerationParams {
            count: 10,
            ..Default::default()
        };
        for concurrency in [1, 4] {
            let outcome = run_batch(&params, &options(concurrency), None, &cancel, now()).await;
            assert!(outcome.candidates.is_empty());
            assert!(outcome.cancelled);
            assert_eq!(outcome.requested, 10);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_mid_batch_keeps_finished_candidates() {
        let params = CandidateGenerationParams {
            count: 6,
            use_ai_enhancement: true,
            seed: Some(3),
            ..Default::default()
        };
        let enhancer: Arc<dyn CandidateEnhancer> = Arc::new(StaticEnhancer {
            profile: sample_profile(),
            delay: Duration::from_secs(10),
        });
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(15)).await;
            trigger.cancel();
        });

        let outcome = run_batch(&params, &options(2), Some(enhancer), &cancel, now()).await;

        assert!(outcome.cancelled);
        assert_eq!(outcome.candidates.len(), 2);
        assert!(outcome.candidates.iter().all(|c| c.has_tag(AI_ENHANCED_TAG)));
    }

    #[tokio::test]
    async fn test_failing_enhancer_does_not_fail_batch() {
        let params = CandidateGenerationParams {
            count: 5,
            use_ai_enhancement: true,
            seed: Some(8),
            ..Default::default()
        };
        let enhancer: Arc<dyn CandidateEnhancer> = Arc::new(FailingEnhancer);
        let outcome = run_batch(
            &params,
            &options(3),
            Some(enhancer),
            &CancellationToken::new(),
            now(),
        )
        .await;
        assert_eq!(outcome.candidates.len(), 5);
        assert!(outcome
            .candidates
            .iter()
            .all(|c| !c.has_tag(AI_ENHANCED_TAG)));
    }

    #[tokio::test]
    async fn test_enhancer_ignored_unless_requested() {
        let params = CandidateGenerationParams {
            count: 2,
            seed: Some(9),
            ..Default::default()
        };
        let enhancer: Arc<dyn CandidateEnhancer> = Arc::new(StaticEnhancer {
            profile: sample_profile(),
            delay: Duration::ZERO,
        });
        let outcome = run_batch(
            &params,
            &options(1),
            Some(enhancer),
            &CancellationToken::new(),
            now(),
        )
        .await;
        assert!(outcome
            .candidates
            .iter()
            .all(|c| !c.has_tag(AI_ENHANCED_TAG)));
    }
}
