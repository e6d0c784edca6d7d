use async_trait::async_trait;

use crate::auth::application::domain::entities::{Requester, UserId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkReadError {
    #[error("Access denied")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Marks the admin's unread lines in a conversation as read.
#[async_trait]
pub trait MarkReadUseCase: Send + Sync {
    async fn execute(&self, requester: Requester, owner: UserId) -> Result<u64, MarkReadError>;
}
