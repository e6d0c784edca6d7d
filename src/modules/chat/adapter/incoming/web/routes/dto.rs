use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::chat::application::domain::conversation::ConversationSummary;
use crate::modules::chat::application::domain::message::{Message, Sender};

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: String,
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: String,
    #[schema(example = "alice@example.com")]
    pub user_email: String,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "Is my appointment confirmed?")]
    pub message: String,
    pub sender: Sender,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageDto {
    fn from(m: Message) -> Self {
        Self {
            id: m.id.to_string(),
            user_id: m.user_id.to_string(),
            user_email: m.user_email,
            username: m.username,
            message: m.message,
            sender: m.sender,
            is_read: m.is_read,
            created_at: m.created_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDto {
    pub user_id: String,
    pub username: String,
    pub user_email: String,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub last_sender: Sender,
    /// Unread lines written by the patient
    pub unread_count: u64,
}

impl From<ConversationSummary> for ConversationDto {
    fn from(s: ConversationSummary) -> Self {
        Self {
            user_id: s.user_id.to_string(),
            username: s.username,
            user_email: s.user_email,
            last_message: s.last_message,
            last_message_time: s.last_message_time,
            last_sender: s.last_sender,
            unread_count: s.unread_count,
        }
    }
}
