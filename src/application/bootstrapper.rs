//! Application bootstrapper
//!
//! Logging setup and the migration commands behind the `linebridge` binary.

use clap::{Parser, Subcommand};
use sea_orm_migration::{MigratorTrait, SchemaManager};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CONFIG;
use crate::db::{self, DbConn};
use crate::migrations::Migrator;
use crate::services::ledger;

#[derive(Debug, Parser)]
#[command(name = "linebridge", version, about = "Manage the linebridge database schema")]
pub struct Cli {
    /// Database URL, overrides LINEBRIDGE_DATABASE_URL / DATABASE_URL
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Apply all pending migrations (default)
    Up,
    /// Roll back the most recent migrations
    Down {
        /// Number of migrations to roll back
        #[arg(short = 'n', long, default_value_t = 1)]
        steps: u32,
    },
    /// Show applied and pending migrations
    Status,
    /// Drop every table and re-apply all migrations
    Fresh,
}

/// Bootstrap and run the requested command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("linebridge v{}", CONFIG.version);

    let url = cli
        .database_url
        .unwrap_or_else(|| CONFIG.database.database_url.clone());
    let conn = db::open(&url).await?;

    execute(&conn, cli.command.unwrap_or(Command::Up)).await
}

/// Run a single migration command against an open connection
pub async fn execute(conn: &DbConn, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Up => db::migrate(conn).await?,
        Command::Down { steps } => {
            tracing::info!(steps, "Rolling back migrations");
            Migrator::down(conn, Some(steps)).await?;
        }
        Command::Status => {
            for migration in Migrator::get_migration_with_status(conn).await? {
                tracing::info!(
                    name = migration.name(),
                    status = ?migration.status(),
                    "Migration"
                );
            }
            // The ledger table itself is gone once its migration is rolled back.
            if SchemaManager::new(conn).has_table("aerich").await? {
                if let Some(entry) = ledger::latest(conn, &CONFIG.ledger.app).await? {
                    tracing::info!(version = %entry.version, app = %entry.app, "Ledger head");
                }
            }
        }
        Command::Fresh => {
            tracing::warn!("Dropping all tables");
            Migrator::fresh(conn).await?;
            ledger::record_applied(conn, &CONFIG.ledger.app).await?;
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("linebridge={}", CONFIG.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if CONFIG.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_ansi(false))
            .init();
    }
}
