//! User repository trait defining the interface for credential persistence.
//!
//! Implementations handle the actual database operations while maintaining
//! the abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered under the email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find the user currently holding a pending reset token
    ///
    /// Only the latest issued token matches; overwritten tokens match nobody.
    async fn find_by_reset_token(&self, reset_token: &str)
        -> Result<Option<User>, DomainError>;

    /// Check whether a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete all users whose reset-token expiry lies before `before`
    ///
    /// Bulk cleanup used by the reset-token sweeper; mirrors the store's
    /// expiry-based delete. Returns the number of records removed.
    async fn delete_expired_reset_tokens(
        &self,
        before: DateTime<Utc>,
    ) -> Result<usize, DomainError>;
}
