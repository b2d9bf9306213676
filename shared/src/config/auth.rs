//! Authentication configuration module

use serde::{Deserialize, Serialize};

/// Configuration for JWT issuance and the password-reset lifecycle
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT signing secret (HS256)
    pub jwt_secret: String,

    /// Access token expiry in minutes
    #[serde(default = "default_access_token_expiry_minutes")]
    pub access_token_expiry_minutes: i64,

    /// Refresh token expiry in days
    #[serde(default = "default_refresh_token_expiry_days")]
    pub refresh_token_expiry_days: i64,

    /// Password reset token lifetime in minutes
    #[serde(default = "default_reset_token_expiry_minutes")]
    pub reset_token_expiry_minutes: i64,

    /// Interval between reset-token sweeps in seconds
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("development-secret-please-change-in-production"),
            access_token_expiry_minutes: default_access_token_expiry_minutes(),
            refresh_token_expiry_days: default_refresh_token_expiry_days(),
            reset_token_expiry_minutes: default_reset_token_expiry_minutes(),
            sweep_interval_seconds: default_sweep_interval_seconds(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.jwt_secret = secret;
        }
        if let Some(minutes) = env_i64("ACCESS_TOKEN_EXPIRY_MINUTES") {
            config.access_token_expiry_minutes = minutes;
        }
        if let Some(days) = env_i64("REFRESH_TOKEN_EXPIRY_DAYS") {
            config.refresh_token_expiry_days = days;
        }
        if let Some(minutes) = env_i64("RESET_TOKEN_EXPIRY_MINUTES") {
            config.reset_token_expiry_minutes = minutes;
        }
        if let Some(seconds) = env_i64("RESET_SWEEP_INTERVAL_SECONDS") {
            config.sweep_interval_seconds = seconds.max(1) as u64;
        }
        config
    }
}

fn env_i64(key: &str) -> Option<i64> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn default_access_token_expiry_minutes() -> i64 {
    15
}

fn default_refresh_token_expiry_days() -> i64 {
    7
}

fn default_reset_token_expiry_minutes() -> i64 {
    60
}

fn default_sweep_interval_seconds() -> u64 {
    3600
}
