use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::postings::store::JobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation backend. Default: Gemini `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// Persistence backend. Default: `PgJobStore`.
    pub store: Arc<dyn JobStore>,
}
