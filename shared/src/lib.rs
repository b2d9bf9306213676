//! Shared utilities and common types for the StoreFront server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope structures
//! - Utility functions (email/password validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AgentConfig, AuthConfig, DatabaseConfig, EmailConfig, ServerConfig,
};
pub use types::{ApiResponse, ErrorResponse};
pub use utils::validation;
