use async_trait::async_trait;

use crate::auth::application::domain::one_time_code::ONE_TIME_CODE_TTL_MINUTES;
use crate::email::application::ports::outgoing::user_email_notifier::{
    CodeRecipient, UserEmailNotificationError, UserEmailNotifier,
};
use crate::email::application::services::EmailService;

/// Renders clinic-branded code emails and hands them to the transport.
#[derive(Debug, Clone)]
pub struct UserEmailService {
    email_service: EmailService,
    clinic_name: String,
}

impl UserEmailService {
    pub fn new(email_service: EmailService, clinic_name: impl Into<String>) -> Self {
        Self {
            email_service,
            clinic_name: clinic_name.into(),
        }
    }

    fn render(&self, recipient: &CodeRecipient, code: &str, purpose: &str) -> String {
        format!(
            r#"
            <div style="font-family: Arial, sans-serif; line-height: 1.5;">
                <p>Hi {username},</p>
                <p>Here is your {purpose} code for {clinic}:</p>
                <p style="font-size: 28px; font-weight: bold; letter-spacing: 6px;">{code}</p>
                <p>This code expires in {ttl} minutes. If you did not request it, you can ignore this email.</p>
                <p>Thank you,<br>{clinic}</p>
            </div>
            "#,
            username = recipient.username,
            purpose = purpose,
            clinic = self.clinic_name,
            code = code,
            ttl = ONE_TIME_CODE_TTL_MINUTES,
        )
    }

    async fn deliver(
        &self,
        recipient: &CodeRecipient,
        subject: &str,
        body: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.email_service
            .send_email(&recipient.email, subject, body)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_code(
        &self,
        recipient: &CodeRecipient,
        code: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let subject = format!("Your {} Verification Code", self.clinic_name);
        let body = self.render(recipient, code, "verification");
        self.deliver(recipient, &subject, &body).await
    }

    async fn send_password_reset_code(
        &self,
        recipient: &CodeRecipient,
        code: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let subject = format!("Your {} Password Reset Code", self.clinic_name);
        let body = self.render(recipient, code, "password reset");
        self.deliver(recipient, &subject, &body).await
    }
}
