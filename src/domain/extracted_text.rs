use super::document::FormatTag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub content: String,
    pub source_format: FormatTag,
}

impl ExtractedText {
    pub fn new(content: String, source_format: FormatTag) -> Self {
        Self {
            content,
            source_format,
        }
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
