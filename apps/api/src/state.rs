use std::sync::Arc;

use crate::extraction::TextExtractor;
use crate::llm_client::TextGenerator;
use crate::tailoring::format::OutputFormat;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generation backend. Default: GeminiClient.
    pub generator: Arc<dyn TextGenerator>,
    /// Pluggable document text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    pub output_format: OutputFormat,
}
