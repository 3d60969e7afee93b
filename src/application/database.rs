use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

use crate::config::CONFIG;
use crate::error::{AppError, Result};
use crate::migrations::Migrator;
use crate::services::ledger;

pub type DbConn = DatabaseConnection;

/// Create a new database connection and run migrations using config
pub async fn connect() -> Result<DbConn> {
    connect_with_url(&CONFIG.database.database_url).await
}

/// Create a new database connection with a specific URL, run migrations and
/// bring the ledger up to date
pub async fn connect_with_url(database_url: &str) -> Result<DbConn> {
    let db = open(database_url).await?;
    migrate(&db).await?;
    Ok(db)
}

/// Open a connection pool without touching the schema
pub async fn open(database_url: &str) -> Result<DbConn> {
    tracing::info!("Connecting to database...");

    let mut opts = ConnectOptions::new(database_url);
    opts.max_connections(CONFIG.database.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(false);

    Database::connect(opts)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to connect to database: {}", e)))
}

/// Apply pending migrations and record them in the ledger
pub async fn migrate(db: &DbConn) -> Result<()> {
    tracing::info!("Running database migrations...");
    Migrator::up(db, None)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to run migrations: {}", e)))?;
    tracing::info!("Database migrations completed");

    let written = ledger::record_applied(db, &CONFIG.ledger.app).await?;
    if written > 0 {
        tracing::info!(written, "Migration ledger updated");
    }

    Ok(())
}
