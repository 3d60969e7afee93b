use std::env;

/// App label written to every `aerich` row.
pub const DEFAULT_LEDGER_APP: &str = "models";

#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub app: String,
}

impl LedgerConfig {
    pub fn from_env() -> Self {
        Self {
            app: env::var("LINEBRIDGE_LEDGER_APP")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_LEDGER_APP.to_string()),
        }
    }
}
