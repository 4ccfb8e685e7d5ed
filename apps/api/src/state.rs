use std::sync::Arc;

use crate::config::Config;
use crate::enhancement::CandidateEnhancer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable enhancement backend. `None` when no API key is configured,
    /// in which case `use_ai_enhancement` requests are served deterministically.
    pub enhancer: Option<Arc<dyn CandidateEnhancer>>,
}
