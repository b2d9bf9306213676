//! Domain error to HTTP response mapping
//!
//! Every route returns `Result<HttpResponse, ApiError>`; this module is
//! the single place deciding status codes, stable error codes, and which
//! messages cross the wire. Internal errors get a generic body - details
//! stay in the logs.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use sf_core::errors::{AgentError, AuthError, DomainError, TokenError};
use sf_shared::types::response::ErrorResponse;

/// Wrapper turning a `DomainError` into an HTTP response
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ApiError {
    /// Stable machine-readable code for the error
    fn error_code(&self) -> &'static str {
        match &self.0 {
            DomainError::Validation { .. } => "validation_error",
            DomainError::NotFound { .. } => "not_found",
            DomainError::Internal { .. } => "internal_error",
            DomainError::Auth(e) => match e {
                AuthError::EmailAlreadyRegistered => "email_already_registered",
                AuthError::InvalidCredentials => "invalid_credentials",
                AuthError::UserNotFound => "user_not_found",
                AuthError::InvalidResetToken => "invalid_reset_token",
                AuthError::ResetTokenExpired => "reset_token_expired",
                AuthError::PasswordHashFailed => "internal_error",
                AuthError::EmailDeliveryFailed => "email_delivery_failed",
            },
            DomainError::Token(e) => match e {
                TokenError::TokenExpired => "token_expired",
                TokenError::TokenNotYetValid => "token_not_yet_valid",
                TokenError::InvalidSignature
                | TokenError::InvalidTokenFormat
                | TokenError::InvalidClaims => "invalid_token",
                TokenError::TokenGenerationFailed => "internal_error",
            },
            DomainError::Agent(e) => match e {
                AgentError::BusinessNotFound { .. } => "business_not_found",
                AgentError::UpstreamUnavailable => "service_unavailable",
            },
        }
    }

    /// Message safe to put on the wire
    fn public_message(&self) -> String {
        match &self.0 {
            DomainError::Internal { .. } => "An internal error occurred".to_string(),
            DomainError::Auth(AuthError::PasswordHashFailed) => {
                "An internal error occurred".to_string()
            }
            DomainError::Token(TokenError::TokenGenerationFailed) => {
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            DomainError::Auth(e) => match e {
                AuthError::EmailAlreadyRegistered => StatusCode::CONFLICT,
                AuthError::InvalidCredentials | AuthError::UserNotFound => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::InvalidResetToken | AuthError::ResetTokenExpired => {
                    StatusCode::BAD_REQUEST
                }
                AuthError::PasswordHashFailed => StatusCode::INTERNAL_SERVER_ERROR,
                AuthError::EmailDeliveryFailed => StatusCode::SERVICE_UNAVAILABLE,
            },
            DomainError::Token(e) => match e {
                TokenError::TokenGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::UNAUTHORIZED,
            },
            DomainError::Agent(e) => match e {
                AgentError::BusinessNotFound { .. } => StatusCode::NOT_FOUND,
                AgentError::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("Internal error: {}", self.0);
        }
        HttpResponse::build(self.status_code())
            .json(ErrorResponse::new(self.error_code(), self.public_message()))
    }
}

/// Maps `validator` failures into a 400 with the first offending field
pub fn validation_error(errors: &validator::ValidationErrors) -> ApiError {
    let field = errors
        .field_errors()
        .keys()
        .next()
        .map(|k| k.to_string())
        .unwrap_or_else(|| "request".to_string());

    ApiError(DomainError::Validation {
        message: format!("Invalid value for field '{}'", field),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let conflict = ApiError(AuthError::EmailAlreadyRegistered.into());
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let unauthorized = ApiError(AuthError::InvalidCredentials.into());
        assert_eq!(unauthorized.status_code(), StatusCode::UNAUTHORIZED);

        let expired_reset = ApiError(AuthError::ResetTokenExpired.into());
        assert_eq!(expired_reset.status_code(), StatusCode::BAD_REQUEST);

        let expired_token = ApiError(TokenError::TokenExpired.into());
        assert_eq!(expired_token.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_errors_are_generic_on_the_wire() {
        let err = ApiError(DomainError::Internal {
            message: "connection pool exhausted at 10.0.0.3".to_string(),
        });
        assert_eq!(err.public_message(), "An internal error occurred");
    }
}
