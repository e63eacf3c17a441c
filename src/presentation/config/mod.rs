mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LlmProvider, LlmSettings, LoggingSettings, ProcessingSettings, PromptSettings, ServerSettings,
    Settings, SettingsError, UploadSettings,
};
