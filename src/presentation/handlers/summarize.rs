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
pub struct SummarizeRequest {
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub summary: String,
    pub truncated: bool,
}

#[tracing::instrument(skip(state, payload))]
pub async fn summarize_handler<F, L>(
    State(state): State<AppState<F, L>>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection),
    };
    let text = match required_field(request.text, "No text provided") {
        Ok(text) => text,
        Err(response) => return response,
    };

    tracing::debug!(text = %sanitize_prompt(&text), "Summarizing text");

    match state.document_service.summarize(&text).await {
        Ok(output) => (
            StatusCode::OK,
            Json(SummarizeResponse {
                success: true,
                summary: output.text,
                truncated: output.truncated,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Summary failed");
            task_error_response(&e)
        }
    }
}
