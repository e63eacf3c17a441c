use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ExtractedText, FormatTag, SourceDocument};

use super::blocking::run_parser;

/// Reads body paragraphs in document order. Table cells, headers and footers are not part of
/// the paragraph stream and are skipped.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_paragraphs(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let docx = docx_rs::read_docx(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("error reading DOCX: {e}")))?;

        let paragraphs = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => {
                    let mut text = String::new();
                    collect_runs(&paragraph.children, &mut text);
                    Some(text)
                }
                _ => None,
            })
            .collect();

        Ok(paragraphs)
    }
}

fn collect_runs(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_runs(&link.children, out),
            _ => {}
        }
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
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
        if document.format_tag != FormatTag::Docx {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format_tag.to_string(),
            ));
        }

        let data = document.data.clone();
        let paragraphs = run_parser("DOCX", move || Self::extract_paragraphs(&data)).await?;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        let text = paragraphs.join("\n").trim().to_string();
        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(ExtractedText::new(text, FormatTag::Docx))
    }
}
