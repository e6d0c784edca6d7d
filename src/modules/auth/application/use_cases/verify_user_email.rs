use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::domain::one_time_code::CodeCheckError;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyUserEmailError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email already verified")]
    AlreadyVerified,

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Verification code expired")]
    CodeExpired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IVerifyUserEmailUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, code: &str) -> Result<(), VerifyUserEmailError>;
}

pub struct VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IVerifyUserEmailUseCase for VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, code: &str) -> Result<(), VerifyUserEmailError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| VerifyUserEmailError::RepositoryError(e.to_string()))?
            .ok_or(VerifyUserEmailError::UserNotFound)?;

        if user.is_verified {
            return Err(VerifyUserEmailError::AlreadyVerified);
        }

        // No stored code behaves like a mismatch
        let stored = user
            .verification_code
            .as_ref()
            .ok_or(VerifyUserEmailError::InvalidCode)?;

        stored.check(code, Utc::now()).map_err(|e| {
            warn!(user_id = %user_id, "Verification code rejected: {}", e);
            match e {
                CodeCheckError::Mismatch => VerifyUserEmailError::InvalidCode,
                CodeCheckError::Expired => VerifyUserEmailError::CodeExpired,
            }
        })?;

        self.repository
            .mark_verified(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => VerifyUserEmailError::UserNotFound,
                other => VerifyUserEmailError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "Email verified");
        Ok(())
    }
}
