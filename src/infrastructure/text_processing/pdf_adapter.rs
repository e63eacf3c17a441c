use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ExtractedText, FormatTag, SourceDocument};

use super::blocking::run_parser;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("error reading PDF: {e}")))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, document),
        fields(
            filename = %document.filename,
            size_bytes = document.size_bytes(),
        )
    )]
    async fn extract_text(
        &self,
        document: &SourceDocument,
    ) -> Result<ExtractedText, FileLoaderError> {
        if document.format_tag != FormatTag::Pdf {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format_tag.to_string(),
            ));
        }

        let data = document.data.clone();
        let pages = run_parser("PDF", move || Self::extract_pages(&data)).await?;

        let page_count = pages.len();
        tracing::info!(page_count, "PDF text extraction complete");

        let text = pages.join("\n").trim().to_string();
        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(ExtractedText::new(text, FormatTag::Pdf))
    }
}
