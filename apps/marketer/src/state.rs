use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::marketing::pipeline::Marketer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; holds the cached exchange rate.
    pub marketer: Arc<Marketer>,
    /// Present only when `ANTHROPIC_API_KEY` is configured.
    pub llm: Option<LlmClient>,
}
