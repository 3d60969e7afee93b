//! Tests for environment-driven configuration

use std::env;
use std::sync::Mutex;

use linebridge::config::database::DatabaseConfig;
use linebridge::config::ledger::{LedgerConfig, DEFAULT_LEDGER_APP};
use linebridge::config::logging::LoggingConfig;
use linebridge::config::security::SecurityConfig;

// Tests in this file mutate process-wide environment variables.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear(keys: &[&str]) {
    for key in keys {
        env::remove_var(key);
    }
}

#[test]
fn test_database_url_precedence() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear(&["LINEBRIDGE_DATABASE_URL", "DATABASE_URL"]);

    let default = DatabaseConfig::from_env();
    assert!(default.database_url.starts_with("postgres://"));
    assert!(!default.is_sqlite());

    env::set_var("DATABASE_URL", "sqlite::memory:");
    assert_eq!(DatabaseConfig::from_env().database_url, "sqlite::memory:");
    assert!(DatabaseConfig::from_env().is_sqlite());

    env::set_var("LINEBRIDGE_DATABASE_URL", "postgres://app@db/app");
    assert_eq!(
        DatabaseConfig::from_env().database_url,
        "postgres://app@db/app"
    );

    clear(&["LINEBRIDGE_DATABASE_URL", "DATABASE_URL"]);
}

#[test]
fn test_max_connections() {
    let _guard = ENV_LOCK.lock().unwrap();

    env::remove_var("LINEBRIDGE_MAX_CONNECTIONS");
    assert_eq!(DatabaseConfig::from_env().max_connections, 10);

    env::set_var("LINEBRIDGE_MAX_CONNECTIONS", "3");
    assert_eq!(DatabaseConfig::from_env().max_connections, 3);

    env::set_var("LINEBRIDGE_MAX_CONNECTIONS", "0");
    assert_eq!(DatabaseConfig::from_env().max_connections, 10);

    env::set_var("LINEBRIDGE_MAX_CONNECTIONS", "many");
    assert_eq!(DatabaseConfig::from_env().max_connections, 10);

    env::remove_var("LINEBRIDGE_MAX_CONNECTIONS");
}

#[test]
fn test_ledger_app() {
    let _guard = ENV_LOCK.lock().unwrap();

    env::remove_var("LINEBRIDGE_LEDGER_APP");
    assert_eq!(LedgerConfig::from_env().app, DEFAULT_LEDGER_APP);

    env::set_var("LINEBRIDGE_LEDGER_APP", "  ");
    assert_eq!(LedgerConfig::from_env().app, DEFAULT_LEDGER_APP);

    env::set_var("LINEBRIDGE_LEDGER_APP", "notify");
    assert_eq!(LedgerConfig::from_env().app, "notify");

    env::remove_var("LINEBRIDGE_LEDGER_APP");
}

#[test]
fn test_logging() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear(&["LINEBRIDGE_LOG_LEVEL", "LINEBRIDGE_LOG_FORMAT"]);

    let default = LoggingConfig::from_env();
    assert_eq!(default.level, "info");
    assert!(!default.json);

    env::set_var("LINEBRIDGE_LOG_LEVEL", "debug");
    env::set_var("LINEBRIDGE_LOG_FORMAT", "JSON");
    let custom = LoggingConfig::from_env();
    assert_eq!(custom.level, "debug");
    assert!(custom.json);

    clear(&["LINEBRIDGE_LOG_LEVEL", "LINEBRIDGE_LOG_FORMAT"]);
}

#[test]
fn test_bcrypt_cost_is_clamped() {
    let _guard = ENV_LOCK.lock().unwrap();

    env::remove_var("LINEBRIDGE_BCRYPT_COST");
    assert_eq!(SecurityConfig::from_env().bcrypt_cost, bcrypt::DEFAULT_COST);

    env::set_var("LINEBRIDGE_BCRYPT_COST", "2");
    assert_eq!(SecurityConfig::from_env().bcrypt_cost, 4);

    env::set_var("LINEBRIDGE_BCRYPT_COST", "40");
    assert_eq!(SecurityConfig::from_env().bcrypt_cost, 31);

    env::set_var("LINEBRIDGE_BCRYPT_COST", "6");
    assert_eq!(SecurityConfig::from_env().bcrypt_cost, 6);

    env::remove_var("LINEBRIDGE_BCRYPT_COST");
}

#[test]
fn test_config_collects_sections() {
    let _guard = ENV_LOCK.lock().unwrap();

    let config = linebridge::config::Config::from_env();

    assert!(!config.version.is_empty());
    assert!(config.version.contains('.'));
    assert!(config.database.max_connections > 0);
    assert!(!config.ledger.app.is_empty());
}
