use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;

const RATE_LIMIT_MESSAGE: &str = "Rate Limit Exceeded: You've made too many requests. \
    Please wait a few minutes and try again. For higher limits, consider upgrading your Gemini API plan.";
const AUTH_MESSAGE: &str = "API Key Error: The Gemini API key is invalid or doesn't have permission. \
    Please check the server configuration.";
const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// The response body is always `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Job Description is required.")]
    MissingJobDescription,

    #[error("Please provide either a PDF resume or paste your resume text.")]
    MissingResume,

    #[error("Failed to extract text from PDF. The file may be image-based. Please paste your resume text manually instead.")]
    EmptyExtractedText,

    #[error("Failed to parse PDF file: {0}. Please paste your resume text manually instead.")]
    ExtractionFailed(String),

    #[error("Invalid form submission: {0}")]
    MalformedForm(String),

    #[error("Uploaded file is too large. Please upload a smaller PDF or paste your resume text manually instead.")]
    PayloadTooLarge,

    #[error("{}", rate_limit_message(.retry_delay.as_deref()))]
    RateLimited { retry_delay: Option<String> },

    #[error("{}", AUTH_MESSAGE)]
    AuthError,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Any other status reported by the generation service, passed through.
    #[error("{message}")]
    ServiceError { status: u16, message: String },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

fn rate_limit_message(retry_delay: Option<&str>) -> String {
    match retry_delay {
        Some(delay) => format!("{RATE_LIMIT_MESSAGE} Retry after: {delay}"),
        None => RATE_LIMIT_MESSAGE.to_string(),
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingJobDescription
            | AppError::MissingResume
            | AppError::MalformedForm(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::EmptyExtractedText => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::AuthError => StatusCode::FORBIDDEN,
            AppError::ServiceError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::ExtractionFailed(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The text shown to the caller. Internal causes are never included.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::ExtractionFailed(err.to_string())
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api {
                status: 429,
                retry_delay,
                ..
            } => AppError::RateLimited { retry_delay },
            LlmError::Api {
                status: 401 | 403, ..
            } => AppError::AuthError,
            LlmError::Api {
                status: 400,
                message,
                ..
            } => AppError::BadRequest(if message.is_empty() {
                "Invalid request to Gemini API".to_string()
            } else {
                message
            }),
            LlmError::Api {
                status,
                status_text,
                message,
                ..
            } => AppError::ServiceError {
                status,
                message: match status_text {
                    Some(text) => format!("{text}: {message}"),
                    None => message,
                },
            },
            other @ (LlmError::Http(_) | LlmError::Parse(_) | LlmError::EmptyContent) => {
                AppError::Internal(anyhow::Error::new(other).context("generation call failed"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            e if status.is_server_error() => tracing::error!("{e}"),
            e => tracing::warn!("Request rejected ({status}): {e}"),
        }

        let body = Json(json!({ "error": self.user_message() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: &str, retry_delay: Option<&str>) -> LlmError {
        LlmError::Api {
            status,
            status_text: StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .map(String::from),
            message: message.to_string(),
            retry_delay: retry_delay.map(String::from),
        }
    }

    #[test]
    fn test_rate_limit_carries_retry_delay() {
        let err = AppError::from(api(429, "quota", Some("30s")));
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(err.user_message().contains("Retry after: 30s"));
    }

    #[test]
    fn test_rate_limit_without_hint() {
        let err = AppError::from(api(429, "quota", None));
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(!err.user_message().contains("Retry after"));
    }

    #[test]
    fn test_auth_failures_map_to_forbidden() {
        for status in [401, 403] {
            let err = AppError::from(api(status, "denied", None));
            assert!(matches!(err, AppError::AuthError));
            assert_eq!(err.status(), StatusCode::FORBIDDEN);
        }
    }

    #[test]
    fn test_bad_request_includes_service_detail() {
        let err = AppError::from(api(400, "API key not valid", None));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Bad Request: API key not valid");
    }

    #[test]
    fn test_bad_request_without_detail_gets_fallback() {
        let err = AppError::from(api(400, "", None));
        assert_eq!(
            err.user_message(),
            "Bad Request: Invalid request to Gemini API"
        );
    }

    #[test]
    fn test_other_status_passes_through() {
        let err = AppError::from(api(503, "The model is overloaded.", None));
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.user_message(),
            "Service Unavailable: The model is overloaded."
        );
    }

    #[test]
    fn test_other_status_without_reason_phrase() {
        let err = AppError::from(LlmError::Api {
            status: 599,
            status_text: None,
            message: "odd".to_string(),
            retry_delay: None,
        });
        assert_eq!(err.status().as_u16(), 599);
        assert_eq!(err.user_message(), "odd");
    }

    #[test]
    fn test_unclassified_failures_are_generic() {
        let err = AppError::from(LlmError::EmptyContent);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Internal Server Error");
    }

    #[test]
    fn test_extraction_failure_keeps_cause() {
        let err = AppError::from(ExtractionError::Pdf("invalid file header".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.user_message().contains("invalid file header"));
        assert!(err.user_message().contains("paste your resume text manually"));
    }

    #[test]
    fn test_validation_statuses() {
        assert_eq!(
            AppError::MissingJobDescription.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::MissingResume.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::EmptyExtractedText.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert!(AppError::EmptyExtractedText
            .user_message()
            .contains("image-based"));
    }

    #[test]
    fn test_payload_too_large_status() {
        let err = AppError::PayloadTooLarge;
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert!(err.user_message().contains("too large"));
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = AppError::MissingResume.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({"error": "Please provide either a PDF resume or paste your resume text."})
        );
    }
}
