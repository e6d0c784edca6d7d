use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::chat::application::domain::message::{Message, Sender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub user_id: UserId,
    pub user_email: String,
    pub username: String,
    pub message: String,
    pub sender: Sender,
    pub is_read: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Conversation owner does not exist")]
    OwnerNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, data: NewMessage) -> Result<Message, MessageRepositoryError>;

    /// Flips unread lines from `sender` in the conversation. Returns how many changed.
    async fn mark_read(&self, owner: UserId, sender: Sender) -> Result<u64, MessageRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), MessageRepositoryError>;
}
