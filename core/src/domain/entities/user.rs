//! User entity representing a registered account in the StoreFront system.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// A regular account owner
    User,
    /// An administrative account
    Admin,
}

impl Role {
    /// Stable string form used in JWT claims and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    /// Parse a role from its claim string form
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address; globally unique
    pub email: String,

    /// One-way bcrypt hash of the password; never the plaintext
    pub password_hash: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Account role
    pub role: Role,

    /// Pending password-reset token; set only while a reset is pending
    pub reset_token: Option<String>,

    /// Expiry of the pending reset token; always set and cleared with `reset_token`
    pub reset_token_expiry: Option<DateTime<Utc>>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with the default role
    pub fn new(
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            role: Role::User,
            reset_token: None,
            reset_token_expiry: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Enters the pending-reset state, overwriting any prior token
    pub fn begin_password_reset(&mut self, reset_token: String, ttl: Duration) {
        self.reset_token = Some(reset_token);
        self.reset_token_expiry = Some(Utc::now() + ttl);
        self.updated_at = Utc::now();
    }

    /// Clears the reset pair, returning to the idle state
    pub fn clear_password_reset(&mut self) {
        self.reset_token = None;
        self.reset_token_expiry = None;
        self.updated_at = Utc::now();
    }

    /// Checks whether a password reset is pending
    pub fn has_pending_reset(&self) -> bool {
        self.reset_token.is_some()
    }

    /// Checks whether the pending reset token has expired
    ///
    /// Returns `false` when no reset is pending.
    pub fn reset_token_expired(&self) -> bool {
        match self.reset_token_expiry {
            Some(expiry) => expiry < Utc::now(),
            None => false,
        }
    }

    /// Checks if the user has the admin role
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
