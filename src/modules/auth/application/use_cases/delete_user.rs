use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Removes the account row. Appointments and messages go with it through
/// the cascading foreign keys.
#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError>;
}

pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IDeleteUserUseCase for DeleteUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError> {
        self.repository
            .delete_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "User account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_fixtures::{sample_user, MockUserRepositoryMock};

    #[tokio::test]
    async fn deletes_existing_account() {
        let user_id = sample_user().id;

        let mut repo = MockUserRepositoryMock::new();
        repo.expect_delete_user()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(DeleteUserUseCase::new(repo).execute(user_id).await, Ok(()));
    }

    #[tokio::test]
    async fn missing_account_is_not_found() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_delete_user()
            .returning(|_| Err(UserRepositoryError::UserNotFound));

        assert_eq!(
            DeleteUserUseCase::new(repo).execute(sample_user().id).await,
            Err(DeleteUserError::UserNotFound)
        );
    }

    #[tokio::test]
    async fn database_failure_is_wrapped() {
        let mut repo = MockUserRepositoryMock::new();
        repo.expect_delete_user()
            .returning(|_| Err(UserRepositoryError::DatabaseError("gone".to_string())));

        let result = DeleteUserUseCase::new(repo).execute(sample_user().id).await;
        assert!(matches!(result, Err(DeleteUserError::RepositoryError(_))));
    }
}
