use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::chat::application::domain::conversation::ConversationSummary;
use crate::modules::chat::application::domain::message::{Message, Sender};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid stored message: {0}")]
    InvalidRecord(String),
}

#[async_trait]
pub trait MessageQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, MessageQueryError>;

    /// Oldest first.
    async fn list_conversation(&self, owner: UserId) -> Result<Vec<Message>, MessageQueryError>;

    async fn count_unread(&self, owner: UserId, sender: Sender) -> Result<u64, MessageQueryError>;

    /// One row per conversation, most recent activity first.
    async fn conversation_summaries(&self) -> Result<Vec<ConversationSummary>, MessageQueryError>;
}
