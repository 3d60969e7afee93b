use std::env;

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// bcrypt work factor, clamped to the range bcrypt accepts
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    pub fn from_env() -> Self {
        Self {
            bcrypt_cost: env::var("LINEBRIDGE_BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .map(|c| c.clamp(4, 31))
                .unwrap_or(bcrypt::DEFAULT_COST),
        }
    }
}
