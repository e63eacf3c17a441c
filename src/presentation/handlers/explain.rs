use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::{json_rejection_response, required_field, task_error_response};

#[derive(Deserialize)]
pub struct ExplainRequest {
    pub term: Option<String>,
}

#[derive(Serialize)]
pub struct ExplainResponse {
    pub success: bool,
    pub explanation: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn explain_handler<F, L>(
    State(state): State<AppState<F, L>>,
    payload: Result<Json<ExplainRequest>, JsonRejection>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection),
    };
    let term = match required_field(request.term, "No term provided") {
        Ok(term) => term,
        Err(response) => return response,
    };
    let term = term.trim();

    tracing::debug!(term = %sanitize_prompt(term), "Explaining term");

    match state.document_service.explain_term(term).await {
        Ok(explanation) => (
            StatusCode::OK,
            Json(ExplainResponse {
                success: true,
                explanation,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Term explanation failed");
            task_error_response(&e)
        }
    }
}
