use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ExtractedText, FormatTag, SourceDocument};

use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

/// Routes a document to the adapter registered for its format tag.
pub struct CompositeFileLoader {
    adapters: HashMap<FormatTag, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(FormatTag, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF, DOCX and plain-text adapters.
    pub fn with_default_adapters() -> Self {
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let docx: Arc<dyn FileLoader> = Arc::new(DocxAdapter::new());
        let text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);

        Self::new(vec![
            (FormatTag::Pdf, pdf),
            (FormatTag::Docx, docx),
            (FormatTag::Txt, text),
        ])
    }

    pub fn supports(&self, format_tag: FormatTag) -> bool {
        self.adapters.contains_key(&format_tag)
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        document: &SourceDocument,
    ) -> Result<ExtractedText, FileLoaderError> {
        let adapter = self.adapters.get(&document.format_tag).ok_or_else(|| {
            tracing::warn!(format = %document.format_tag, "No adapter registered for format");
            FileLoaderError::UnsupportedFormat(document.format_tag.to_string())
        })?;

        adapter.extract_text(document).await
    }
}
