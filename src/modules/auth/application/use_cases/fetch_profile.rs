use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::outgoing::user_query::UserQueryError;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FetchUserError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

#[async_trait]
pub trait FetchUserProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchUserError>;
}
