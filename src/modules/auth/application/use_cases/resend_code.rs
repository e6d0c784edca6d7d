use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

use crate::auth::application::domain::entities::{normalize_email, UserId};
use crate::auth::application::domain::one_time_code::OneTimeCode;
use crate::auth::application::ports::outgoing::{
    CodeGenerator, UserQuery, UserRepository, UserRepositoryError,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    CodeRecipient, UserEmailNotifier,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResendCodeError {
    #[error("Email is required")]
    MissingEmail,

    #[error("User not found")]
    UserNotFound,

    #[error("Email already verified")]
    AlreadyVerified,

    #[error("Could not deliver verification code: {0}")]
    DeliveryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IResendCodeUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<UserId, ResendCodeError>;
}

/// Replaces the stored verification code with a fresh one and mails it.
pub struct ResendCodeUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    code_generator: Arc<dyn CodeGenerator>,
    notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<Q, R> ResendCodeUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        code_generator: Arc<dyn CodeGenerator>,
        notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            code_generator,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IResendCodeUseCase for ResendCodeUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<UserId, ResendCodeError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ResendCodeError::MissingEmail);
        }

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| ResendCodeError::RepositoryError(e.to_string()))?
            .ok_or(ResendCodeError::UserNotFound)?;

        if user.is_verified {
            return Err(ResendCodeError::AlreadyVerified);
        }

        let code = self.code_generator.generate();

        self.repository
            .set_verification_code(user.id, OneTimeCode::issue(&code, Utc::now()))
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ResendCodeError::UserNotFound,
                other => ResendCodeError::RepositoryError(other.to_string()),
            })?;

        let recipient = CodeRecipient {
            email: user.email.clone(),
            username: user.username.clone(),
        };

        self.notifier
            .send_verification_code(&recipient, &code)
            .await
            .map_err(|e| {
                error!(user_id = %user.id, "Resending verification code failed: {}", e);
                ResendCodeError::DeliveryFailed(e.to_string())
            })?;

        info!(user_id = %user.id, "Verification code reissued");
        Ok(user.id)
    }
}
