use std::sync::Arc;

use crate::extract::TextExtractor;
use crate::llm_client::InferenceClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup, never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Inference backend. Production: `GeminiClient`. Swapped for a double in tests.
    pub llm: Arc<dyn InferenceClient>,
    /// PDF text extraction backend. Production: `PdfTextExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
}
