//! Outbound notification seam
//!
//! The core never talks to an email provider directly; it goes through
//! this trait so orchestration logic stays testable without network I/O.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Abstraction over the transactional email provider
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Sends the post-registration welcome email
    async fn send_welcome_email(&self, to: &str, first_name: &str) -> Result<(), DomainError>;

    /// Sends the password-reset email containing the single-use token
    async fn send_password_reset_email(
        &self,
        to: &str,
        reset_token: &str,
    ) -> Result<(), DomainError>;
}

/// In-memory notification service for tests
///
/// Records every message it was asked to send and can be toggled to fail,
/// which lets orchestration tests assert delivery-failure handling.
pub struct MockNotificationService {
    sent: std::sync::Mutex<Vec<SentEmail>>,
    fail_next: std::sync::atomic::AtomicBool,
}

/// A recorded outbound email
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub kind: SentEmailKind,
    pub body_fragment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentEmailKind {
    Welcome,
    PasswordReset,
}

impl MockNotificationService {
    pub fn new() -> Self {
        Self {
            sent: std::sync::Mutex::new(Vec::new()),
            fail_next: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// Makes every subsequent send fail with `EmailDeliveryFailed`
    pub fn set_failing(&self, failing: bool) {
        self.fail_next
            .store(failing, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn sent_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn record(&self, to: &str, kind: SentEmailKind, body_fragment: &str) -> Result<(), DomainError> {
        if self.fail_next.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(crate::errors::AuthError::EmailDeliveryFailed.into());
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            kind,
            body_fragment: body_fragment.to_string(),
        });
        Ok(())
    }
}

impl Default for MockNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationService for MockNotificationService {
    async fn send_welcome_email(&self, to: &str, first_name: &str) -> Result<(), DomainError> {
        self.record(to, SentEmailKind::Welcome, first_name)
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        reset_token: &str,
    ) -> Result<(), DomainError> {
        self.record(to, SentEmailKind::PasswordReset, reset_token)
    }
}
