//! Test helpers and utilities for integration testing.
//!
//! Every test gets its own in-memory SQLite database with all migrations
//! applied.

#![allow(dead_code)]

use chrono::{Duration, Utc};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use linebridge::migrations::Migrator;
use linebridge::models::user;
use linebridge::schemas::{CreateUser, LineLoginTokens};

/// Keep bcrypt cheap. Must run before anything reads `CONFIG`.
pub fn init_test_env() {
    std::env::set_var("LINEBRIDGE_BCRYPT_COST", "4");
}

/// Create a fresh in-memory SQLite database without running migrations
pub async fn create_empty_db() -> DatabaseConnection {
    init_test_env();
    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

/// Create an in-memory SQLite database for testing
pub async fn create_test_db() -> DatabaseConnection {
    let db = create_empty_db().await;

    Migrator::up(&db, None)
        .await
        .expect("Failed to run test migrations");

    db
}

/// Create a migrated PostgreSQL database in its own `schema`.
/// Returns None unless DATABASE_URL points at PostgreSQL.
pub async fn create_postgres_test_db(schema: &str) -> Option<DatabaseConnection> {
    init_test_env();

    let db_url = std::env::var("DATABASE_URL").ok()?;
    if !db_url.starts_with("postgres") {
        return None;
    }

    let admin = Database::connect(&db_url)
        .await
        .expect("Failed to connect to PostgreSQL test database");
    admin
        .execute_unprepared(&format!(
            "DROP SCHEMA IF EXISTS \"{schema}\" CASCADE; CREATE SCHEMA \"{schema}\""
        ))
        .await
        .expect("Failed to reset test schema");

    let mut opts = ConnectOptions::new(db_url);
    opts.set_schema_search_path(schema);
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to PostgreSQL test schema");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run test migrations");

    Some(db)
}

/// Create a test user and return the user model
pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
    email: Option<&str>,
) -> user::Model {
    linebridge::services::users::create_user(
        db,
        CreateUser {
            name: name.to_string(),
            email: email.map(str::to_string),
            ..Default::default()
        },
    )
    .await
    .expect("Failed to create test user")
}

/// A LINE Login payload for `sub`
pub fn sample_tokens(sub: &str) -> LineLoginTokens {
    LineLoginTokens {
        access_token: format!("access-{}", sub),
        refresh_token: format!("refresh-{}", sub),
        expires_in: Utc::now() + Duration::days(30),
        sub: sub.to_string(),
        name: "Taro Line".to_string(),
        picture: "https://profile.line-scdn.net/abcdefg".to_string(),
        email: None,
    }
}
