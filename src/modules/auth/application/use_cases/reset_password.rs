use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::normalize_email;
use crate::auth::application::domain::one_time_code::CodeCheckError;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ResetPasswordInput {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid reset code")]
    InvalidCode,

    #[error("Reset code expired")]
    CodeExpired,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, input: ResetPasswordInput) -> Result<(), ResetPasswordError>;
}

pub struct ResetPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R> ResetPasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<Q, R> IResetPasswordUseCase for ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: ResetPasswordInput) -> Result<(), ResetPasswordError> {
        let email = normalize_email(&input.email);
        if email.is_empty() {
            return Err(ResetPasswordError::MissingField("email"));
        }
        if input.code.trim().is_empty() {
            return Err(ResetPasswordError::MissingField("code"));
        }
        if input.new_password.is_empty() {
            return Err(ResetPasswordError::MissingField("newPassword"));
        }

        self.password_policy
            .validate(&input.new_password)
            .map_err(|e| ResetPasswordError::InvalidPassword(e.to_string()))?;

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?
            .ok_or(ResetPasswordError::UserNotFound)?;

        let stored = user
            .reset_code
            .as_ref()
            .ok_or(ResetPasswordError::InvalidCode)?;

        stored.check(&input.code, Utc::now()).map_err(|e| {
            warn!(user_id = %user.id, "Reset code rejected: {}", e);
            match e {
                CodeCheckError::Mismatch => ResetPasswordError::InvalidCode,
                CodeCheckError::Expired => ResetPasswordError::CodeExpired,
            }
        })?;

        let password_hash = self
            .password_hasher
            .hash_password(&input.new_password)
            .await
            .map_err(|e| ResetPasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .reset_password(user.id, password_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ResetPasswordError::UserNotFound,
                other => ResetPasswordError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Password reset");
        Ok(())
    }
}
