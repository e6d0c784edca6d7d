use async_trait::async_trait;
use chrono::{Duration, Utc};
use mockall::mock;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::chat::application::domain::conversation::ConversationSummary;
use crate::modules::chat::application::domain::message::{Message, Sender};
use crate::modules::chat::application::ports::outgoing::{
    MessageQuery, MessageQueryError, MessageRepository, MessageRepositoryError, NewMessage,
};

mock! {
    pub MessageQueryMock {}

    #[async_trait]
    impl MessageQuery for MessageQueryMock {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, MessageQueryError>;
        async fn list_conversation(&self, owner: UserId) -> Result<Vec<Message>, MessageQueryError>;
        async fn count_unread(&self, owner: UserId, sender: Sender) -> Result<u64, MessageQueryError>;
        async fn conversation_summaries(&self) -> Result<Vec<ConversationSummary>, MessageQueryError>;
    }
}

mock! {
    pub MessageRepositoryMock {}

    #[async_trait]
    impl MessageRepository for MessageRepositoryMock {
        async fn create(&self, data: NewMessage) -> Result<Message, MessageRepositoryError>;
        async fn mark_read(&self, owner: UserId, sender: Sender) -> Result<u64, MessageRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), MessageRepositoryError>;
    }
}

pub fn sample_message(owner: UserId, sender: Sender, text: &str) -> Message {
    Message {
        id: Uuid::new_v4(),
        user_id: owner,
        user_email: "alice@example.com".to_string(),
        username: "alice".to_string(),
        message: text.to_string(),
        sender,
        is_read: sender.initially_read(),
        created_at: Utc::now() - Duration::seconds(5),
    }
}

/// What the repository hands back for a successful insert.
pub fn stored(data: NewMessage) -> Message {
    Message {
        id: Uuid::new_v4(),
        user_id: data.user_id,
        user_email: data.user_email,
        username: data.username,
        message: data.message,
        sender: data.sender,
        is_read: data.is_read,
        created_at: Utc::now(),
    }
}

/* --------------------------------------------------
 * Shared in-memory message table
 * -------------------------------------------------- */

/// Backs both chat ports with one list. Clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryMessages {
    rows: Arc<Mutex<Vec<Message>>>,
}

impl InMemoryMessages {
    fn rows(&self) -> MutexGuard<'_, Vec<Message>> {
        self.rows.lock().unwrap()
    }
}

#[async_trait]
impl MessageQuery for InMemoryMessages {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, MessageQueryError> {
        Ok(self.rows().iter().find(|m| m.id == id).cloned())
    }

    async fn list_conversation(&self, owner: UserId) -> Result<Vec<Message>, MessageQueryError> {
        let mut thread: Vec<Message> = self
            .rows()
            .iter()
            .filter(|m| m.user_id == owner)
            .cloned()
            .collect();
        thread.sort_by_key(|m| m.created_at);
        Ok(thread)
    }

    async fn count_unread(&self, owner: UserId, sender: Sender) -> Result<u64, MessageQueryError> {
        let count = self
            .rows()
            .iter()
            .filter(|m| m.user_id == owner && m.sender == sender && !m.is_read)
            .count();
        Ok(count as u64)
    }

    async fn conversation_summaries(&self) -> Result<Vec<ConversationSummary>, MessageQueryError> {
        unimplemented!("inbox aggregation lives in SQL")
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessages {
    async fn create(&self, data: NewMessage) -> Result<Message, MessageRepositoryError> {
        let message = stored(data);
        self.rows().push(message.clone());
        Ok(message)
    }

    async fn mark_read(&self, owner: UserId, sender: Sender) -> Result<u64, MessageRepositoryError> {
        let mut updated = 0;
        for row in self
            .rows()
            .iter_mut()
            .filter(|m| m.user_id == owner && m.sender == sender && !m.is_read)
        {
            row.is_read = true;
            updated += 1;
        }
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), MessageRepositoryError> {
        let mut rows = self.rows();
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            return Err(MessageRepositoryError::NotFound);
        }
        Ok(())
    }
}
