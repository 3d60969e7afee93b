//! Payloads handed over by the LINE platform.
//!
//! Token values are stored as-is and never interpreted.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Tokens and profile fields from a LINE Login exchange
#[derive(Debug, Clone, Deserialize)]
pub struct LineLoginTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Absolute expiry of `access_token`
    pub expires_in: DateTime<Utc>,
    pub sub: String,
    pub name: String,
    pub picture: String,
    pub email: Option<String>,
}

/// LINE reports `expires_in` as seconds from now; the table stores an instant.
///
/// Negative values expire immediately. Values past chrono's range saturate
/// to `DateTime::<Utc>::MAX_UTC`.
pub fn expiry_after(issued_at: DateTime<Utc>, expires_in_secs: i64) -> DateTime<Utc> {
    Duration::try_seconds(expires_in_secs.max(0))
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewNotifyRecord {
    pub message: String,
    /// Maximum size of 240x240px JPEG
    #[serde(default, alias = "image_thumb_nail", alias = "imageThumbnail")]
    pub image_thumbnail: Option<String>,
    /// Maximum size of 2048x2048px JPEG
    #[serde(default, alias = "imageFullsize")]
    pub image_full_size: Option<String>,
}
