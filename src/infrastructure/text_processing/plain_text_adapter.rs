use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ExtractedText, FormatTag, SourceDocument};

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        document: &SourceDocument,
    ) -> Result<ExtractedText, FileLoaderError> {
        if document.format_tag != FormatTag::Txt {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format_tag.to_string(),
            ));
        }

        let text = std::str::from_utf8(&document.data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("error reading TXT: {e}")))?
            .trim();

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(ExtractedText::new(text.to_string(), FormatTag::Txt))
    }
}
