use crate::config::CONFIG;
use crate::error::Result;

/// Hash a password using bcrypt with the configured cost
pub fn hash_password(password: &str) -> Result<String> {
    hash_password_with_cost(password, CONFIG.security.bcrypt_cost)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
