use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::{COMMON_LEGAL_TERMS, DEFAULT_TERM_LIMIT, detect_legal_terms};

use super::error::{json_rejection_response, required_field};

#[derive(Serialize)]
pub struct TermsResponse {
    pub terms: Vec<String>,
}

#[derive(Deserialize)]
pub struct DetectTermsRequest {
    pub text: Option<String>,
    pub limit: Option<usize>,
}

pub async fn common_terms_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(TermsResponse {
            terms: COMMON_LEGAL_TERMS.iter().map(|t| t.to_string()).collect(),
        }),
    )
}

#[tracing::instrument(skip(payload))]
pub async fn detect_terms_handler(
    payload: Result<Json<DetectTermsRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection),
    };
    let text = match required_field(request.text, "No text provided") {
        Ok(text) => text,
        Err(response) => return response,
    };

    let terms = detect_legal_terms(&text, request.limit.unwrap_or(DEFAULT_TERM_LIMIT));
    tracing::debug!(found = terms.len(), "Detected candidate legal terms");

    (StatusCode::OK, Json(TermsResponse { terms })).into_response()
}
