//! Configuration for the authentication service

use sf_shared::config::AuthConfig;

/// Tunables for authentication orchestration
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// How long a password-reset token stays redeemable (minutes)
    pub reset_token_expiry_minutes: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            reset_token_expiry_minutes: 60,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            reset_token_expiry_minutes: config.reset_token_expiry_minutes,
        }
    }
}
