#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRecipient {
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Account notifications carrying one-time codes.
#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_code(
        &self,
        recipient: &CodeRecipient,
        code: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_password_reset_code(
        &self,
        recipient: &CodeRecipient,
        code: &str,
    ) -> Result<(), UserEmailNotificationError>;
}
