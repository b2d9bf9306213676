//! # Infrastructure Layer
//!
//! Concrete implementations of the core crate's external seams:
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: transactional email over an HTTP API
//! - **AI**: Gemini generation client

// Re-export core error types for convenience
pub use sf_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Email module - outbound transactional email
pub mod email;

/// AI module - generation backend clients
pub mod ai;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email service error: {0}")]
    Email(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
