use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: Option<String>,
    /// Plain-text password, hashed before storage. `None` for LINE-only accounts.
    pub password: Option<String>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Partial profile update. `email: Some(None)` clears the address.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    #[serde(default, with = "double_option")]
    pub email: Option<Option<String>>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub has_password: bool,
    pub create_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            has_password: user.has_password(),
            id: user.id,
            name: user.name,
            email: user.email,
            create_at: user.create_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Distinguishes an absent field from an explicit `null`.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}
