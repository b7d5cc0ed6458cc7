use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const MISSING_MEMBER_DATA: &str = "Missing member data";
pub const FAILED_TO_PARSE: &str = "Failed to parse response";
pub const NO_JSON_FOUND: &str = "No JSON found in response";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", MISSING_MEMBER_DATA)]
    MissingData,

    #[error("Invalid request: {0}")]
    InvalidData(String),

    #[error("{0}")]
    ParseFailure(String),

    #[error("{0}")]
    Upstream(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingData | AppError::InvalidData(_) => StatusCode::BAD_REQUEST,
            AppError::ParseFailure(_) | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidData(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::ParseFailure(msg) => tracing::error!("Model response unusable: {msg}"),
            AppError::Upstream(msg) => tracing::error!("Generation API error: {msg}"),
            AppError::InvalidData(msg) => tracing::debug!("Rejected request body: {msg}"),
            AppError::MissingData => {}
        }

        // Upstream messages are passed through verbatim; the front-end shows them as-is.
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_message_is_literal() {
        assert_eq!(AppError::MissingData.to_string(), MISSING_MEMBER_DATA);
        assert_eq!(AppError::MissingData.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_failure_is_500_with_plain_message() {
        let err = AppError::ParseFailure(FAILED_TO_PARSE.to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to parse response");
    }

    #[test]
    fn test_llm_error_becomes_upstream_with_raw_message() {
        let err: AppError = LlmError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("API key not valid"));
    }

    #[test]
    fn test_into_response_status_codes() {
        assert_eq!(
            AppError::InvalidData("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Upstream("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
