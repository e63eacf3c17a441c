use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{ExtractedText, SourceDocument, TaskKind};

use super::ai_invoker::AiInvoker;
use super::prompt_builder::PromptBuilder;
use super::task_error::TaskError;
use super::text_bounder::{TextBudgets, bound_text};

/// Model output for one task, with a note on whether the input was cut to fit the budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutput {
    pub text: String,
    pub truncated: bool,
}

/// Result of an upload whose extraction succeeded. Each AI slot succeeds or fails on its own.
#[derive(Debug)]
pub struct UploadOutcome {
    pub extracted: ExtractedText,
    pub simplified: Result<TaskOutput, TaskError>,
    pub summary: Result<TaskOutput, TaskError>,
}

pub struct DocumentService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    file_loader: Arc<F>,
    invoker: AiInvoker<L>,
    prompt_builder: PromptBuilder,
    budgets: TextBudgets,
}

impl<F, L> DocumentService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(
        file_loader: Arc<F>,
        invoker: AiInvoker<L>,
        prompt_builder: PromptBuilder,
        budgets: TextBudgets,
    ) -> Self {
        Self {
            file_loader,
            invoker,
            prompt_builder,
            budgets,
        }
    }

    pub fn budgets(&self) -> TextBudgets {
        self.budgets
    }

    #[tracing::instrument(skip(self, text), fields(input_chars = text.chars().count()))]
    pub async fn simplify(&self, text: &str) -> Result<TaskOutput, TaskError> {
        self.run_bounded(TaskKind::Simplify, self.budgets.simplify, text)
            .await
    }

    #[tracing::instrument(skip(self, text), fields(input_chars = text.chars().count()))]
    pub async fn summarize(&self, text: &str) -> Result<TaskOutput, TaskError> {
        self.run_bounded(TaskKind::Summarize, self.budgets.summarize, text)
            .await
    }

    /// Terms are sent as-is; they are short by construction.
    #[tracing::instrument(skip(self, term))]
    pub async fn explain_term(&self, term: &str) -> Result<String, TaskError> {
        let prompt = self.prompt_builder.build(TaskKind::ExplainTerm, term);
        self.invoker.invoke(TaskKind::ExplainTerm, &prompt).await
    }

    #[tracing::instrument(
        skip(self, document),
        fields(
            filename = %document.filename,
            format = %document.format_tag,
            size_bytes = document.size_bytes(),
        )
    )]
    pub async fn extract(&self, document: &SourceDocument) -> Result<ExtractedText, TaskError> {
        if !document.format_tag.is_supported() {
            tracing::warn!("Rejecting unsupported format before extraction");
            return Err(TaskError::UnsupportedFormat(document.filename.clone()));
        }

        let extracted = self.file_loader.extract_text(document).await?;
        tracing::info!(chars = extracted.char_count(), "Text extracted");
        Ok(extracted)
    }

    /// Extracts once, then runs simplification and summarization concurrently. Extraction
    /// failures abort before any model call.
    pub async fn process_upload(
        &self,
        document: SourceDocument,
    ) -> Result<UploadOutcome, TaskError> {
        let extracted = self.extract(&document).await?;
        drop(document);

        let (simplified, summary) = tokio::join!(
            self.simplify(&extracted.content),
            self.summarize(&extracted.content),
        );

        if let Err(e) = &simplified {
            tracing::warn!(error = %e, "Simplification failed; summary slot unaffected");
        }
        if let Err(e) = &summary {
            tracing::warn!(error = %e, "Summary failed; simplification slot unaffected");
        }

        Ok(UploadOutcome {
            extracted,
            simplified,
            summary,
        })
    }

    async fn run_bounded(
        &self,
        task: TaskKind,
        budget: usize,
        text: &str,
    ) -> Result<TaskOutput, TaskError> {
        let bounded = bound_text(text, budget);
        if bounded.truncated {
            tracing::debug!(task = %task, budget, "Input truncated to budget");
        }

        let prompt = self.prompt_builder.build(task, &bounded.content);
        let text = self.invoker.invoke(task, &prompt).await?;

        Ok(TaskOutput {
            text,
            truncated: bounded.truncated,
        })
    }
}
