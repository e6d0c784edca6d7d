use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct ChangePasswordInput {
    pub user_id: UserId,
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0}")]
    InvalidPassword(String),

    #[error("Current password is incorrect")]
    InvalidCurrentPassword,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangePasswordUseCase: Send + Sync {
    async fn execute(&self, input: ChangePasswordInput) -> Result<(), ChangePasswordError>;
}

pub struct ChangePasswordUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R> ChangePasswordUseCase<Q, R>
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
impl<Q, R> IChangePasswordUseCase for ChangePasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: ChangePasswordInput) -> Result<(), ChangePasswordError> {
        if input.current_password.is_empty() {
            return Err(ChangePasswordError::MissingField("currentPassword"));
        }
        if input.new_password.is_empty() {
            return Err(ChangePasswordError::MissingField("newPassword"));
        }

        self.password_policy
            .validate(&input.new_password)
            .map_err(|e| ChangePasswordError::InvalidPassword(e.to_string()))?;

        let user = self
            .query
            .find_by_id(input.user_id)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let matches = self
            .password_hasher
            .verify_password(&input.current_password, &user.password_hash)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;
        if !matches {
            warn!(user_id = %user.id, "Password change rejected: wrong current password");
            return Err(ChangePasswordError::InvalidCurrentPassword);
        }

        let new_hash = self
            .password_hasher
            .hash_password(&input.new_password)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(user.id, new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}
