mod batch;
mod config;
mod enhancement;
mod errors;
mod flaws;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::enhancement::{CandidateEnhancer, LlmEnhancer};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talentsim API v{}", env!("CARGO_PKG_VERSION"));

    // Enhancement is optional: only wired when an API key is configured
    let enhancer: Option<Arc<dyn CandidateEnhancer>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!(
                "Enhancement enabled (model: {}, timeout: {:?})",
                llm_client::MODEL,
                config.enhancement_timeout
            );
            let enhancer: Arc<dyn CandidateEnhancer> = Arc::new(LlmEnhancer::new(llm));
            Some(enhancer)
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; enhancement disabled");
            None
        }
    };

    info!(
        "Batch limits: concurrency {}, max size {}",
        config.generation_concurrency, config.max_batch_size
    );

    let state = AppState {
        config: config.clone(),
        enhancer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
