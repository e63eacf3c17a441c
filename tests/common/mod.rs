#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use legalease::application::ports::{
    FileLoader, FileLoaderError, LlmClient, LlmClientError,
};
use legalease::application::services::{
    AiInvoker, DocumentService, PromptBuilder, SIMPLIFICATION_PROMPT, SUMMARY_PROMPT, TextBudgets,
};
use legalease::domain::{ExtractedText, SourceDocument};

/// Echoes the user message back so tests can assert on exactly what reached the model.
pub struct EchoLlmClient;

#[async_trait::async_trait]
impl LlmClient for EchoLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        Ok(user_prompt.to_string())
    }
}

pub struct FailingLlmClient;

#[async_trait::async_trait]
impl LlmClient for FailingLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        Err(LlmClientError::ApiRequestFailed("quota exceeded".to_string()))
    }
}

/// Fails only the calls whose system instruction matches `failing_instruction`.
pub struct SelectiveLlmClient {
    pub failing_instruction: &'static str,
}

impl SelectiveLlmClient {
    pub fn failing_simplify() -> Self {
        Self {
            failing_instruction: SIMPLIFICATION_PROMPT,
        }
    }

    pub fn failing_summary() -> Self {
        Self {
            failing_instruction: SUMMARY_PROMPT,
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for SelectiveLlmClient {
    async fn complete(
        &self,
        system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        if system_prompt == self.failing_instruction {
            Err(LlmClientError::ApiRequestFailed("model unavailable".to_string()))
        } else if system_prompt == SIMPLIFICATION_PROMPT {
            Ok("plain version".to_string())
        } else {
            Ok("short summary".to_string())
        }
    }
}

/// Records every call so tests can prove whether the model was reached.
#[derive(Default)]
pub struct RecordingLlmClient {
    calls: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl RecordingLlmClient {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlmClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push((system_prompt.to_string(), user_prompt.to_string()));
        }
        Ok("recorded".to_string())
    }
}

pub struct SlowLlmClient(pub Duration);

#[async_trait::async_trait]
impl LlmClient for SlowLlmClient {
    async fn complete(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, LlmClientError> {
        tokio::time::sleep(self.0).await;
        Ok("too late".to_string())
    }
}

/// Treats every document as UTF-8 text regardless of its tag.
pub struct Utf8FileLoader;

#[async_trait::async_trait]
impl FileLoader for Utf8FileLoader {
    async fn extract_text(
        &self,
        document: &SourceDocument,
    ) -> Result<ExtractedText, FileLoaderError> {
        let text = String::from_utf8(document.data.clone())
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;
        Ok(ExtractedText::new(text, document.format_tag))
    }
}

pub struct BrokenFileLoader;

#[async_trait::async_trait]
impl FileLoader for BrokenFileLoader {
    async fn extract_text(
        &self,
        _document: &SourceDocument,
    ) -> Result<ExtractedText, FileLoaderError> {
        Err(FileLoaderError::ExtractionFailed("corrupt archive".to_string()))
    }
}

pub fn service<F, L>(file_loader: F, llm_client: L) -> DocumentService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    service_with(Arc::new(file_loader), Arc::new(llm_client), None)
}

pub fn service_with<F, L>(
    file_loader: Arc<F>,
    llm_client: Arc<L>,
    timeout: Option<Duration>,
) -> DocumentService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    DocumentService::new(
        file_loader,
        AiInvoker::new(llm_client, timeout),
        PromptBuilder::default(),
        TextBudgets::default(),
    )
}
