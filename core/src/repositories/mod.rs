//! Repository interfaces for persistence, implemented in the infra crate

pub mod business;
pub mod user;

pub use business::{BusinessRepository, MockBusinessRepository};
pub use user::{MockUserRepository, UserRepository};
