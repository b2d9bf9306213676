//! Password hashing and reset-token generation

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::errors::{AuthError, DomainError};

/// Length of generated password-reset tokens
pub const RESET_TOKEN_LENGTH: usize = 32;

/// Hashes a plaintext password with bcrypt at the default cost
pub fn hash_password(password: &str) -> Result<String, DomainError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|_| AuthError::PasswordHashFailed.into())
}

/// Verifies a plaintext password against a stored bcrypt hash
///
/// A malformed stored hash verifies as false rather than erroring; the
/// caller only ever learns "matched or not".
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

/// Generates a random alphanumeric single-use reset token
pub fn generate_reset_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RESET_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
