use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};

#[derive(Debug, Clone)]
pub struct UpdateUserProfileInput {
    pub user_id: UserId,
    pub username: String,
    pub contact_number: String,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum UpdateUserProfileError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        input: UpdateUserProfileInput,
    ) -> Result<UserProfile, UpdateUserProfileError>;
}
