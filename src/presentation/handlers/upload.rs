use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::{TaskError, TaskOutput};
use crate::domain::SourceDocument;
use crate::presentation::state::AppState;

use super::error::{error_response, task_error_response};

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: String,
    pub original_text: String,
    pub simplified_text: String,
    pub summary: String,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplify_error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_error: Option<&'static str>,
}

/// Flattens one AI slot into the text shown to the caller plus an error kind when it failed.
fn slot(result: Result<TaskOutput, TaskError>) -> (String, bool, Option<&'static str>) {
    match result {
        Ok(output) => (output.text, output.truncated, None),
        Err(e) => (e.user_message(), false, Some(e.kind().as_str())),
    }
}

/// Strips any client-side directory components from the submitted filename.
fn base_name(filename: &str) -> &str {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim()
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(f)) if f.name() == Some(FILE_FIELD) => break f,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Upload request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file provided");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(e.status(), format!("Failed to read multipart: {}", e));
            }
        }
    };

    let filename = base_name(field.file_name().unwrap_or_default()).to_string();
    if filename.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No file selected");
    }

    if !state.upload.is_allowed(&filename) {
        tracing::warn!(filename = %filename, "Rejected file type");
        return task_error_response(&TaskError::UnsupportedFormat(format!(
            "Invalid file type: {filename}"
        )));
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(e.status(), format!("Failed to read file: {}", e));
        }
    };

    if data.len() > state.upload.max_file_size_bytes {
        tracing::warn!(bytes = data.len(), "Upload exceeds size limit");
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "File exceeds maximum size of {} bytes",
                state.upload.max_file_size_bytes
            ),
        );
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    let document = SourceDocument::new(filename.clone(), data.to_vec());
    let outcome = match state.document_service.process_upload(document).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!(error = %e, "Upload extraction failed");
            return task_error_response(&e);
        }
    };

    let (simplified_text, simplify_truncated, simplify_error) = slot(outcome.simplified);
    let (summary, summary_truncated, summary_error) = slot(outcome.summary);

    tracing::info!(
        filename = %filename,
        extracted_chars = outcome.extracted.char_count(),
        simplify_failed = simplify_error.is_some(),
        summary_failed = summary_error.is_some(),
        "Upload processed"
    );

    (
        StatusCode::OK,
        Json(UploadResponse {
            success: true,
            filename,
            original_text: outcome.extracted.content,
            simplified_text,
            summary,
            truncated: simplify_truncated || summary_truncated,
            simplify_error,
            summary_error,
        }),
    )
        .into_response()
}

