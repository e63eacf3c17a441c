use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::mock_llm_client::MockLlmClient;
use super::openai_client::OpenAiClient;

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientError> {
        match settings.provider {
            LlmProvider::Mock => {
                tracing::warn!("Using mock LLM provider; responses are canned");
                Ok(Arc::new(MockLlmClient::default()))
            }
            LlmProvider::OpenAi | LlmProvider::Azure => {
                let client = OpenAiClient::from_settings(settings)?;
                tracing::info!(
                    provider = ?settings.provider,
                    model = %settings.model,
                    temperature = settings.temperature,
                    "LLM client configured"
                );
                Ok(Arc::new(client))
            }
        }
    }
}
