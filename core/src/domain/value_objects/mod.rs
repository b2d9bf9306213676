//! Value objects returned across the service boundary

pub mod auth_response;
pub mod user_profile;

pub use auth_response::AuthResponse;
pub use user_profile::UserProfile;
