//! Authentication service module
//!
//! Orchestrates registration, login, the password-reset lifecycle, token
//! refresh and profile reads on top of the repository and notification
//! seams.

pub mod config;
pub mod password;
pub mod reset_sweeper;
pub mod service;

pub use config::AuthServiceConfig;
pub use password::{generate_reset_token, hash_password, verify_password};
pub use reset_sweeper::{ResetTokenSweeper, SweepResult, SweeperConfig};
pub use service::AuthService;
