//! Axum route handlers for the Generation API.

use anyhow::anyhow;
use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::batch::{generate_batch, BatchOptions, BatchOutcome};
use crate::enhancement::enhance_or_fallback;
use crate::errors::AppError;
use crate::flaws::library::{FlawDefinition, FLAW_LIBRARY};
use crate::generation::archetypes::{self, Archetype};
use crate::generation::assembler::{generate, seeded_rng};
use crate::models::candidate::Candidate;
use crate::models::params::CandidateGenerationParams;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ArchetypeListResponse {
    pub archetypes: Vec<&'static Archetype>,
}

#[derive(Debug, Serialize)]
pub struct FlawListResponse {
    pub flaws: &'static [FlawDefinition],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/archetypes
///
/// Both archetype pools with their baselines and behavior presets.
pub async fn handle_list_archetypes() -> Json<ArchetypeListResponse> {
    Json(ArchetypeListResponse {
        archetypes: archetypes::all().collect(),
    })
}

/// GET /api/v1/flaws
pub async fn handle_list_flaws() -> Json<FlawListResponse> {
    Json(FlawListResponse {
        flaws: &FLAW_LIBRARY,
    })
}

/// POST /api/v1/candidates/generate
///
/// One candidate. `count` and `mixed_quality` are ignored here; use the batch
/// endpoint for pools.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(params): Json<CandidateGenerationParams>,
) -> Result<Json<Candidate>, AppError> {
    let generation_params = params.clone();
    let candidate = tokio::task::spawn_blocking(move || {
        generate(
            &generation_params,
            Utc::now(),
            &mut seeded_rng(generation_params.seed),
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("generation task failed: {e}")))?;

    let candidate = match (&state.enhancer, params.use_ai_enhancement) {
        (Some(enhancer), true) => {
            enhance_or_fallback(
                enhancer.as_ref(),
                candidate,
                state.config.enhancement_timeout,
            )
            .await
        }
        _ => candidate,
    };

    info!(
        "Generated candidate {} {} (mean score {:.1}; {})",
        candidate.id,
        candidate.full_name(),
        candidate
            .interview_performance
            .simulated_interview_scores
            .overall_mean(),
        candidate.metadata.tags.join(", ")
    );

    Ok(Json(candidate))
}

/// POST /api/v1/candidates/batch
///
/// `count` candidates, optionally split by `mixed_quality`. If the client
/// disconnects, slots still pending are cancelled.
pub async fn handle_batch(
    State(state): State<AppState>,
    Json(params): Json<CandidateGenerationParams>,
) -> Result<Json<BatchOutcome>, AppError> {
    let max = state.config.max_batch_size;
    if params.count == 0 || params.count > max {
        return Err(AppError::Validation(format!(
            "count must be between 1 and {max}, got {}",
            params.count
        )));
    }

    let options = BatchOptions {
        concurrency: state.config.generation_concurrency,
        enhancement_timeout: state.config.enhancement_timeout,
    };
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let outcome = generate_batch(&params, &options, state.enhancer.clone(), &cancel).await;

    Ok(Json(outcome))
}
