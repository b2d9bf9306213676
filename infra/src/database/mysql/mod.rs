//! MySQL repository implementations

pub mod business_repository_impl;
pub mod user_repository_impl;

pub use business_repository_impl::MySqlBusinessRepository;
pub use user_repository_impl::MySqlUserRepository;
