//! Business services

pub mod agent;
pub mod auth;
pub mod notification;
pub mod token;

pub use agent::AgentService;
pub use auth::{AuthService, ResetTokenSweeper};
pub use notification::{MockNotificationService, NotificationService};
pub use token::TokenService;
