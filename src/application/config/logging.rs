use std::env;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// Emit JSON lines instead of the human-readable format
    pub json: bool,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var("LINEBRIDGE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            json: env::var("LINEBRIDGE_LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}
