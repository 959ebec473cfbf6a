use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend. `GroqClient` in production, scripted in tests.
    pub provider: Arc<dyn CompletionProvider>,
    pub config: Config,
}
