use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{TaskError, TaskFailureKind};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: error.into(),
            kind: None,
        }),
    )
        .into_response()
}

/// Client-error class for bad input and extraction failures, 502 for model failures.
pub fn task_error_response(err: &TaskError) -> Response {
    let kind = err.kind();
    let status = match kind {
        TaskFailureKind::UnsupportedFormat | TaskFailureKind::ExtractionError => {
            StatusCode::BAD_REQUEST
        }
        TaskFailureKind::AiServiceError => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(ErrorResponse {
            success: false,
            error: err.user_message(),
            kind: Some(kind.as_str()),
        }),
    )
        .into_response()
}

pub fn json_rejection_response(rejection: JsonRejection) -> Response {
    tracing::warn!(error = %rejection.body_text(), "Rejected malformed JSON body");
    error_response(
        StatusCode::BAD_REQUEST,
        format!("Invalid request body: {}", rejection.body_text()),
    )
}

/// Rejects a missing or whitespace-only value; anything else passes through untouched.
pub fn required_field(value: Option<String>, missing_message: &str) -> Result<String, Response> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(error_response(StatusCode::BAD_REQUEST, missing_message)),
    }
}
