use std::fmt;

use crate::application::ports::{FileLoaderError, LlmClientError};
use crate::domain::TaskKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFailureKind {
    UnsupportedFormat,
    ExtractionError,
    AiServiceError,
}

impl TaskFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat => "unsupported_format",
            Self::ExtractionError => "extraction_error",
            Self::AiServiceError => "ai_service_error",
        }
    }
}

impl fmt::Display for TaskFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    Extraction(String),
    #[error("{task} failed: {source}")]
    AiService {
        task: TaskKind,
        #[source]
        source: LlmClientError,
    },
}

impl TaskError {
    pub fn kind(&self) -> TaskFailureKind {
        match self {
            Self::UnsupportedFormat(_) => TaskFailureKind::UnsupportedFormat,
            Self::Extraction(_) => TaskFailureKind::ExtractionError,
            Self::AiService { .. } => TaskFailureKind::AiServiceError,
        }
    }

    /// Caller-facing wording for a failed model call, one phrasing per task.
    pub fn user_message(&self) -> String {
        match self {
            Self::AiService { task, source } => match task {
                TaskKind::Simplify => format!("Error processing text with AI: {source}"),
                TaskKind::Summarize => format!("Error generating summary: {source}"),
                TaskKind::ExplainTerm => format!("Error explaining term: {source}"),
            },
            other => other.to_string(),
        }
    }
}

impl From<FileLoaderError> for TaskError {
    fn from(err: FileLoaderError) -> Self {
        match err {
            FileLoaderError::UnsupportedFormat(format) => Self::UnsupportedFormat(format),
            FileLoaderError::ExtractionFailed(reason) => Self::Extraction(reason),
            FileLoaderError::NoTextFound(name) => Self::Extraction(format!("no text found in {name}")),
        }
    }
}
