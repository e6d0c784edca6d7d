mod email_service;
mod user_email_service;

pub use email_service::EmailService;
pub use user_email_service::UserEmailService;
