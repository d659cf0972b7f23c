//! Axum route handler for the generation endpoint.

use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::orchestrator::{tailor_resume, GenerationRequest};

const FIELD_FILE: &str = "file";
const FIELD_MANUAL_TEXT: &str = "manualResumeText";
const FIELD_JOB_DESCRIPTION: &str = "jobDescription";

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}

/// POST /api/generate
///
/// Multipart fields: `file` (PDF, optional), `manualResumeText` (optional),
/// `jobDescription` (required). Returns `{"result": "..."}`.
pub async fn handle_generate(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| AppError::MalformedForm(e.body_text()))?;
    let request_id = Uuid::new_v4();

    async move {
        let request = read_form(&mut multipart).await?;
        let result = tailor_resume(
            state.generator.as_ref(),
            state.extractor.as_ref(),
            state.output_format,
            request,
        )
        .await?;

        Ok::<_, AppError>(Json(GenerateResponse {
            result: result.body,
        }))
    }
    .instrument(info_span!("generate", %request_id))
    .await
}

/// Collects the known form fields. Unknown fields are skipped; a repeated
/// field keeps its last value.
async fn read_form(multipart: &mut Multipart) -> Result<GenerationRequest, AppError> {
    let mut request = GenerationRequest::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(form_error)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FIELD_FILE => {
                let file_name = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await.map_err(form_error)?;
                debug!("Received file {:?} ({} bytes)", file_name, bytes.len());
                request.file = Some(bytes);
            }
            FIELD_MANUAL_TEXT => {
                request.manual_resume_text = Some(read_text(field).await?);
            }
            FIELD_JOB_DESCRIPTION => {
                request.job_description = Some(read_text(field).await?);
            }
            other => debug!("Ignoring unknown form field {other:?}"),
        }
    }

    Ok(request)
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(form_error)
}

/// A body cut off by the upload limit surfaces as a read failure; axum tags
/// it with 413.
fn form_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::MalformedForm(err.body_text())
    }
}
