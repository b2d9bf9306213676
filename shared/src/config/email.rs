//! Outbound email configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP email delivery API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Base URL of the email delivery API
    pub api_url: String,

    /// API key for the email delivery provider
    pub api_key: String,

    /// Sender address for outbound mail
    pub from_address: String,

    /// Timeout for API requests in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.resend.com/emails"),
            api_key: String::new(),
            from_address: String::from("no-reply@storefront.app"),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("EMAIL_API_URL") {
            config.api_url = url;
        }
        if let Ok(key) = std::env::var("EMAIL_API_KEY") {
            config.api_key = key;
        }
        if let Ok(from) = std::env::var("EMAIL_FROM_ADDRESS") {
            config.from_address = from;
        }
        if let Some(timeout) = std::env::var("EMAIL_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.request_timeout_secs = timeout;
        }
        config
    }
}

fn default_request_timeout_secs() -> u64 {
    10
}
