use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every request is independent.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `GeminiClient` in production, a fake in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
