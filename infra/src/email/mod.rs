//! Email module - outbound transactional email over HTTP

pub mod resend;

pub use resend::ResendEmailService;
