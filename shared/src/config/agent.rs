//! AI assistant upstream configuration module

use serde::{Deserialize, Serialize};

/// Configuration for the external generation endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentConfig {
    /// Base URL of the generation API
    pub api_url: String,

    /// API key for the generation provider
    pub api_key: String,

    /// Model identifier to request
    #[serde(default = "default_model")]
    pub model: String,

    /// Timeout for generation requests in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://generativelanguage.googleapis.com/v1beta"),
            api_key: String::new(),
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AgentConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("GEMINI_API_URL") {
            config.api_url = url;
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.api_key = key;
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Some(timeout) = std::env::var("GEMINI_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.request_timeout_secs = timeout;
        }
        config
    }
}

fn default_model() -> String {
    String::from("gemini-2.5-flash")
}

fn default_request_timeout_secs() -> u64 {
    30
}
