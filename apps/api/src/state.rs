use std::sync::Arc;

use crate::export::Stylesheet;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text generator for both tailoring passes. Default: `LlmClient` (Anthropic).
    pub llm: Arc<dyn TextGenerator>,
    /// Fixed DOCX styling; never mutated after startup.
    pub stylesheet: Stylesheet,
}
