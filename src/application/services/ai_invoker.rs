use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{Prompt, TaskKind};

use super::task_error::TaskError;

/// Single-attempt gateway to the language model. Every failure, including a timeout,
/// comes back as `TaskError::AiService`.
pub struct AiInvoker<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
    timeout: Option<Duration>,
}

impl<L> AiInvoker<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>, timeout: Option<Duration>) -> Self {
        Self {
            llm_client,
            timeout,
        }
    }

    #[tracing::instrument(
        skip(self, prompt),
        fields(
            task = %task,
            payload_chars = prompt.human_payload.chars().count(),
        )
    )]
    pub async fn invoke(&self, task: TaskKind, prompt: &Prompt) -> Result<String, TaskError> {
        let call = self
            .llm_client
            .complete(&prompt.system_instruction, &prompt.human_payload);

        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(LlmClientError::Timeout(limit.as_secs()))),
            None => call.await,
        };

        match result {
            Ok(text) => {
                tracing::info!(response_chars = text.chars().count(), "Model call complete");
                Ok(text)
            }
            Err(source) => {
                tracing::error!(error = %source, "Model call failed");
                Err(TaskError::AiService { task, source })
            }
        }
    }
}
