use std::sync::Arc;

use crate::config::Config;
use crate::key_pool::KeyPool;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini keys plus the process-wide rotation cursor.
    pub keys: KeyPool,
    /// Text generator. `GeminiClient` in production.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
