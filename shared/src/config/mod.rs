//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `agent` - AI assistant upstream endpoint configuration
//! - `auth` - JWT and password-reset lifecycle configuration
//! - `database` - Database connection and pool configuration
//! - `email` - Outbound email delivery configuration
//! - `server` - HTTP server configuration

pub mod agent;
pub mod auth;
pub mod database;
pub mod email;
pub mod server;

pub use agent::AgentConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use server::ServerConfig;
