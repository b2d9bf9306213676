//! Gemini generation client
//!
//! Calls the `generateContent` REST endpoint with a typed request/response
//! shape. Any failure mode here - connection error, timeout, non-2xx
//! status, a body that does not match the declared shape, or an empty
//! candidate list - surfaces as `AgentError::UpstreamUnavailable`; the
//! agent service decides what to do with that.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use sf_core::errors::{AgentError, DomainError};
use sf_core::services::agent::GenerationClient;
use sf_shared::config::AgentConfig;

use crate::InfrastructureError;

/// Generation client for the Gemini `generateContent` API
pub struct GeminiClient {
    client: reqwest::Client,
    config: AgentConfig,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: AgentConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "GEMINI_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(AgentConfig::from_env())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_url, self.config.model
        )
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request failed: {}", e);
                DomainError::Agent(AgentError::UpstreamUnavailable)
            })?;

        if !response.status().is_success() {
            error!("Gemini API returned {}", response.status());
            return Err(AgentError::UpstreamUnavailable.into());
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!("Gemini response did not match expected shape: {}", e);
            DomainError::Agent(AgentError::UpstreamUnavailable)
        })?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                error!("Gemini response contained no candidates");
                DomainError::Agent(AgentError::UpstreamUnavailable)
            })?;

        debug!("Gemini returned {} characters", text.len());
        Ok(text)
    }
}
