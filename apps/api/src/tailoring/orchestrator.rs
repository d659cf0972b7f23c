//! Résumé tailoring — orchestrates one generation request.
//!
//! Flow: validate → resolve résumé text → compose prompt →
//!       generate (single attempt) → sanitize → return.
//!
//! Every step can end the request early with an `AppError`. Nothing here keeps
//! state between requests.

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::extraction::TextExtractor;
use crate::llm_client::TextGenerator;
use crate::tailoring::format::OutputFormat;
use crate::tailoring::prompts::compose_prompt;
use crate::tailoring::sanitize::sanitize_output;

const PREVIEW_CHARS: usize = 200;

/// Raw form values as submitted.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub manual_resume_text: Option<String>,
    pub file: Option<Bytes>,
    pub job_description: Option<String>,
}

/// Where the résumé text comes from once the request is validated.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeSource {
    InlineText(String),
    UploadedDocument(Bytes),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub source: ResumeSource,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub body: String,
}

impl GenerationRequest {
    /// Checks required fields and picks the résumé source.
    ///
    /// Non-blank pasted text wins over an uploaded file. An empty file part
    /// counts as no file.
    pub fn validate(self) -> Result<ValidatedRequest, AppError> {
        let job_description = self
            .job_description
            .filter(|jd| !jd.trim().is_empty())
            .ok_or(AppError::MissingJobDescription)?;

        let inline = self
            .manual_resume_text
            .filter(|text| !text.trim().is_empty());
        let document = self.file.filter(|bytes| !bytes.is_empty());

        let source = match (inline, document) {
            (Some(text), _) => ResumeSource::InlineText(text),
            (None, Some(bytes)) => ResumeSource::UploadedDocument(bytes),
            (None, None) => return Err(AppError::MissingResume),
        };

        Ok(ValidatedRequest {
            source,
            job_description,
        })
    }
}

/// Runs the whole pipeline for one request.
pub async fn tailor_resume(
    generator: &dyn TextGenerator,
    extractor: &dyn TextExtractor,
    format: OutputFormat,
    request: GenerationRequest,
) -> Result<GenerationResult, AppError> {
    // Step 1: Validate
    let ValidatedRequest {
        source,
        job_description,
    } = request.validate()?;

    // Step 2: Resolve résumé text
    let resume_text = resolve_resume_text(extractor, source).await?;

    // Step 3: Compose prompt
    let prompt = compose_prompt(format, &resume_text, &job_description);
    info!(
        "Generating {} résumé: resume_chars={}, jd_chars={}, prompt_chars={}",
        format,
        resume_text.chars().count(),
        job_description.chars().count(),
        prompt.chars().count()
    );

    // Step 4: Generate
    let raw = generator.generate(&prompt).await?;

    // Step 5: Sanitize
    let body = sanitize_output(&raw, format);
    if body.len() != raw.len() {
        debug!(
            "Sanitized generation output: {} -> {} bytes",
            raw.len(),
            body.len()
        );
    }
    if body.is_empty() {
        warn!("Generation service returned no content after sanitizing");
    }

    Ok(GenerationResult { body })
}

async fn resolve_resume_text(
    extractor: &dyn TextExtractor,
    source: ResumeSource,
) -> Result<String, AppError> {
    match source {
        ResumeSource::InlineText(text) => {
            info!("Using manual resume text, length: {}", text.chars().count());
            Ok(text)
        }
        ResumeSource::UploadedDocument(bytes) => {
            info!("Extracting text from uploaded PDF ({} bytes)", bytes.len());
            let text = extractor.extract(bytes).await?;

            debug!(
                "PDF text length: {}, first {} chars: {:?}",
                text.chars().count(),
                PREVIEW_CHARS,
                preview(&text)
            );

            if text.trim().is_empty() {
                warn!("PDF parsing resulted in empty text");
                return Err(AppError::EmptyExtractedText);
            }
            Ok(text)
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
