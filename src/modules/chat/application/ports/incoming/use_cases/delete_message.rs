use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Requester;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteMessageError {
    #[error("Administrator access required")]
    Forbidden,

    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteMessageUseCase: Send + Sync {
    async fn execute(&self, requester: Requester, message_id: Uuid)
        -> Result<(), DeleteMessageError>;
}
