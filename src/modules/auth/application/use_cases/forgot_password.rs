use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

use crate::auth::application::domain::entities::normalize_email;
use crate::auth::application::domain::one_time_code::OneTimeCode;
use crate::auth::application::ports::outgoing::{
    CodeGenerator, UserQuery, UserRepository, UserRepositoryError,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    CodeRecipient, UserEmailNotifier,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("Email is required")]
    MissingEmail,

    #[error("User not found")]
    UserNotFound,

    #[error("Could not deliver reset code: {0}")]
    DeliveryFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IForgotPasswordUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), ForgotPasswordError>;
}

/// Issues a password-reset code. Reset codes live in their own fields and never
/// satisfy email verification, nor the other way round.
pub struct ForgotPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    code_generator: Arc<dyn CodeGenerator>,
    notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl<Q, R> ForgotPasswordUseCase<Q, R>
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
impl<Q, R> IForgotPasswordUseCase for ForgotPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, email: &str) -> Result<(), ForgotPasswordError> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(ForgotPasswordError::MissingEmail);
        }

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| ForgotPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ForgotPasswordError::UserNotFound)?;

        let code = self.code_generator.generate();

        self.repository
            .set_reset_code(user.id, OneTimeCode::issue(&code, Utc::now()))
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ForgotPasswordError::UserNotFound,
                other => ForgotPasswordError::RepositoryError(other.to_string()),
            })?;

        let recipient = CodeRecipient {
            email: user.email.clone(),
            username: user.username.clone(),
        };

        self.notifier
            .send_password_reset_code(&recipient, &code)
            .await
            .map_err(|e| {
                error!(user_id = %user.id, "Sending reset code failed: {}", e);
                ForgotPasswordError::DeliveryFailed(e.to_string())
            })?;

        info!(user_id = %user.id, "Password reset code issued");
        Ok(())
    }
}
