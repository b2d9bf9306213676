//! Domain entities

pub mod business;
pub mod token;
pub mod user;

pub use business::{Business, Product};
pub use token::{Claims, TokenPair};
pub use user::{Role, User};
