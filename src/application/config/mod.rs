pub mod database;
pub mod ledger;
pub mod logging;
pub mod security;

use once_cell::sync::Lazy;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database: database::DatabaseConfig,
    pub ledger: ledger::LedgerConfig,
    pub logging: logging::LoggingConfig,
    pub security: security::SecurityConfig,

    // Build info
    pub version: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database: database::DatabaseConfig::from_env(),
            ledger: ledger::LedgerConfig::from_env(),
            logging: logging::LoggingConfig::from_env(),
            security: security::SecurityConfig::from_env(),

            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
