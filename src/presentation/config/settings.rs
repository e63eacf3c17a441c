use std::env;

use config::{Config, File};
use serde::Deserialize;

use crate::application::services::{PromptTemplates, SIMPLIFY_BUDGET, SUMMARIZE_BUDGET, TextBudgets};
use crate::domain::{FormatTag, extension_of};

use super::Environment;

const DEFAULT_MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub upload: UploadSettings,
    pub processing: ProcessingSettings,
    pub prompts: PromptSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_api_version: String,
    pub max_tokens: Option<usize>,
    /// Zero disables the timeout.
    pub request_timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenAi,
            api_key: String::new(),
            model: "gpt-4".to_string(),
            temperature: 0.3,
            base_url: None,
            azure_endpoint: None,
            azure_api_version: "2024-02-01".to_string(),
            max_tokens: None,
            request_timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    pub max_file_size_bytes: usize,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE,
            allowed_extensions: FormatTag::SUPPORTED
                .iter()
                .map(|tag| tag.as_str().to_string())
                .collect(),
        }
    }
}

impl UploadSettings {
    /// Extension check, case-insensitive. Files without an extension are never allowed.
    pub fn is_allowed(&self, filename: &str) -> bool {
        extension_of(filename).is_some_and(|ext| {
            self.allowed_extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProcessingSettings {
    pub simplify_budget: usize,
    pub summarize_budget: usize,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            simplify_budget: SIMPLIFY_BUDGET,
            summarize_budget: SUMMARIZE_BUDGET,
        }
    }
}

impl ProcessingSettings {
    pub fn budgets(&self) -> TextBudgets {
        TextBudgets {
            simplify: self.simplify_budget,
            summarize: self.summarize_budget,
        }
    }
}

/// Optional replacements for the built-in system instructions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    pub simplify: Option<String>,
    pub summarize: Option<String>,
    pub explain_term: Option<String>,
}

impl PromptSettings {
    pub fn templates(&self) -> PromptTemplates {
        PromptTemplates::with_overrides(
            self.simplify.clone(),
            self.summarize.clone(),
            self.explain_term.clone(),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}

impl Settings {
    /// Layers, lowest precedence first: built-in defaults, `appsettings.<Environment>.toml`,
    /// `APP_*` variables (`APP_LLM__MODEL`), then the `OPENAI_*` variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("upload.allowed_extensions"),
            )
            .set_override_option("llm.api_key", env::var("OPENAI_API_KEY").ok())?
            .set_override_option("llm.model", env::var("OPENAI_MODEL").ok())?
            .set_override_option("llm.temperature", env::var("OPENAI_TEMPERATURE").ok())?
            .set_override_option("llm.base_url", env::var("OPENAI_API_BASE_URL").ok())?
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let mut errors = Vec::new();

        if self.llm.provider != LlmProvider::Mock && self.llm.api_key.trim().is_empty() {
            errors.push("OpenAI API key is required".to_string());
        }

        if !(0.0..=1.0).contains(&self.llm.temperature) {
            errors.push("OPENAI_TEMPERATURE must be between 0 and 1".to_string());
        }

        if self.upload.max_file_size_bytes == 0 {
            errors.push("MAX_FILE_SIZE must be positive".to_string());
        }

        if self.processing.simplify_budget == 0 || self.processing.summarize_budget == 0 {
            errors.push("text budgets must be positive".to_string());
        }

        for ext in &self.upload.allowed_extensions {
            if !FormatTag::parse(ext).is_supported() {
                errors.push(format!("allowed extension '{ext}' has no extractor"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SettingsError::Invalid(errors))
        }
    }
}
