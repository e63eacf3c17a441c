/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub level: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            level: "info".to_string(),
        }
    }
}

impl TracingConfig {
    /// `LOG_FORMAT=json` in the environment forces JSON even when settings say otherwise.
    pub fn new(environment: impl Into<String>, enable_json: bool, level: impl Into<String>) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment.into(),
            json_format: enable_json || defaults.json_format,
            level: level.into(),
        }
    }

    pub fn filter_directive(&self) -> String {
        format!("{},legalease=debug,tower_http=debug", self.level)
    }
}
