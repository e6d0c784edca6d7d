use crate::email::application::ports::outgoing::email_sender::EmailSender;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory sender that records every message, or fails every send.
pub struct MockEmailSender {
    sent_emails: Mutex<Vec<(String, String, String)>>,
    failure: Option<String>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self {
            sent_emails: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            sent_emails: Mutex::new(Vec::new()),
            failure: Some(reason.to_string()),
        }
    }

    pub fn get_sent_emails(&self) -> Vec<(String, String, String)> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        if let Some(reason) = &self.failure {
            return Err(reason.clone());
        }

        self.sent_emails.lock().unwrap().push((
            to.to_string(),
            subject.to_string(),
            body.to_string(),
        ));
        Ok(())
    }
}
