//! HTTP email delivery implementation
//!
//! Sends transactional mail through a Resend-style JSON API. Recipient
//! addresses are masked in logs.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use sf_core::errors::{AuthError, DomainError};
use sf_core::services::NotificationService;
use sf_shared::config::EmailConfig;
use sf_shared::utils::validation::mask_email;

use crate::InfrastructureError;

/// Transactional email service backed by an HTTP API
pub struct ResendEmailService {
    client: reqwest::Client,
    config: EmailConfig,
}

/// Request body for the email API
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: String,
}

impl ResendEmailService {
    /// Create a new email service
    pub fn new(config: EmailConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_KEY not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!("Email service initialized with sender: {}", config.from_address);
        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(EmailConfig::from_env())
    }

    async fn send(&self, to: &str, subject: &str, text: String) -> Result<(), DomainError> {
        let body = SendEmailRequest {
            from: &self.config.from_address,
            to,
            subject,
            text,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Email request to {} failed: {}", mask_email(to), e);
                DomainError::Auth(AuthError::EmailDeliveryFailed)
            })?;

        if !response.status().is_success() {
            error!(
                "Email API returned {} for {}",
                response.status(),
                mask_email(to)
            );
            return Err(AuthError::EmailDeliveryFailed.into());
        }

        info!("Email '{}' sent to {}", subject, mask_email(to));
        Ok(())
    }
}

#[async_trait]
impl NotificationService for ResendEmailService {
    async fn send_welcome_email(&self, to: &str, first_name: &str) -> Result<(), DomainError> {
        let text = format!(
            "Hi {first_name},\n\n\
             Welcome to StoreFront! Your account is ready to use.\n\n\
             The StoreFront Team"
        );
        self.send(to, "Welcome to StoreFront", text).await
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        reset_token: &str,
    ) -> Result<(), DomainError> {
        let text = format!(
            "We received a request to reset your password.\n\n\
             Your reset token is: {reset_token}\n\n\
             It expires in one hour. If you did not request this, you can \
             ignore this email.\n\n\
             The StoreFront Team"
        );
        self.send(to, "Reset your StoreFront password", text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        let config = EmailConfig {
            api_key: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            ResendEmailService::new(config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_api_maps_to_delivery_failure() {
        let config = EmailConfig {
            api_url: "http://127.0.0.1:1/emails".to_string(),
            api_key: "test-key".to_string(),
            request_timeout_secs: 1,
            ..Default::default()
        };
        let service = ResendEmailService::new(config).unwrap();

        let result = service.send_welcome_email("alice@example.com", "Alice").await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::EmailDeliveryFailed))
        ));
    }
}
