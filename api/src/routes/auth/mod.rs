//! Authentication endpoints

mod change_password;
mod forgot_password;
mod login;
mod profile;
mod refresh;
mod register;
mod reset_password;
mod validate_token;

pub use change_password::change_password;
pub use forgot_password::forgot_password;
pub use login::login;
pub use profile::profile;
pub use refresh::refresh;
pub use register::register;
pub use reset_password::reset_password;
pub use validate_token::validate_token;
