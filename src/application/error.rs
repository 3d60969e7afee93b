use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Missing required value: {0}")]
    NotNull(String),

    #[error("Value too long: {0}")]
    ValueTooLong(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(DbErr),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl AppError {
    /// True for errors raised by the engine's constraint system
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            AppError::Conflict(_)
                | AppError::ForeignKey(_)
                | AppError::NotNull(_)
                | AppError::ValueTooLong(_)
        )
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return AppError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return AppError::ForeignKey(msg),
            _ => {}
        }

        let msg = err.to_string();
        let lower = msg.to_lowercase();

        // SQLite and PostgreSQL phrase these differently.
        if lower.contains("not null constraint failed") || lower.contains("violates not-null") {
            AppError::NotNull(msg)
        } else if (lower.contains("check constraint") && lower.contains("length("))
            || lower.contains("value too long for type")
        {
            AppError::ValueTooLong(msg)
        } else if lower.contains("foreign key constraint failed")
            || lower.contains("violates foreign key")
        {
            AppError::ForeignKey(msg)
        } else if lower.contains("unique constraint failed")
            || lower.contains("duplicate key value")
        {
            AppError::Conflict(msg)
        } else {
            AppError::Database(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
