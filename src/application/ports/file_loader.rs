use async_trait::async_trait;

use crate::domain::{ExtractedText, SourceDocument};

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, document: &SourceDocument)
    -> Result<ExtractedText, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
