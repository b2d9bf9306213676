//! JWT token issuance and validation

pub mod config;
pub mod service;

pub use config::TokenServiceConfig;
pub use service::TokenService;
