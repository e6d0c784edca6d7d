use async_trait::async_trait;

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::chat::application::domain::message::{Message, MessageBodyError, Sender};

#[derive(Debug, Clone)]
pub struct SendMessageInput {
    pub user_id: UserId,
    pub user_email: String,
    pub username: String,
    pub message: String,
    pub sender: Sender,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendMessageError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidBody(#[from] MessageBodyError),

    #[error("Access denied")]
    Forbidden,

    #[error("User not found")]
    OwnerNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
        input: SendMessageInput,
    ) -> Result<Message, SendMessageError>;
}
