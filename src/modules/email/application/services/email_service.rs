use crate::email::application::ports::outgoing::email_sender::EmailSender;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct EmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for EmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl EmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    pub async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        if to.trim().is_empty() {
            return Err("recipient address is empty".to_string());
        }

        self.sender.send_email(to, subject, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use std::sync::Arc;

    // Mock EmailSender trait
    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
        }
    }

    #[test]
    fn debug_hides_sender() {
        let mock_sender = Arc::new(MockEmailSenderMock::new()) as Arc<dyn EmailSender + Send + Sync>;
        let email_service = EmailService::new(mock_sender);

        assert_eq!(
            format!("{:?}", email_service),
            "EmailService { sender: \"<dyn EmailSender>\" }"
        );
    }

    #[tokio::test]
    async fn forwards_to_sender() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send_email()
            .withf(|to, subject, body| {
                to == "alice@example.com" && subject == "Subject" && body == "<p>Body</p>"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = EmailService::new(Arc::new(sender));
        let result = service
            .send_email("alice@example.com", "Subject", "<p>Body</p>")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_blank_recipient_without_calling_sender() {
        let mut sender = MockEmailSenderMock::new();
        sender.expect_send_email().times(0);

        let service = EmailService::new(Arc::new(sender));
        let result = service.send_email("  ", "Subject", "Body").await;

        assert!(result.is_err());
    }
}