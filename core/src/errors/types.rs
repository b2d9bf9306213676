//! Domain-specific error types for authentication, tokens, and the AI agent
//!
//! Error messages here are internal; the presentation layer maps them to
//! stable error codes and user-facing messages.

use thiserror::Error;
use uuid::Uuid;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid or unknown reset token")]
    InvalidResetToken,

    #[error("Reset token has expired")]
    ResetTokenExpired,

    #[error("Password hashing failed")]
    PasswordHashFailed,

    #[error("Email delivery failed")]
    EmailDeliveryFailed,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// AI agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Business not found with id {id}")]
    BusinessNotFound { id: Uuid },

    #[error("Generation endpoint unavailable")]
    UpstreamUnavailable,
}
