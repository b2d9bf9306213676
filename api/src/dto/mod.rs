//! Request and response data transfer objects

pub mod agent;
pub mod auth;
