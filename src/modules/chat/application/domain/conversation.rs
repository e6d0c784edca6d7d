use chrono::{DateTime, Utc};

use super::message::Sender;
use crate::auth::application::domain::entities::UserId;

/// One row of the admin inbox.
///
/// Name and email come from the latest line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    pub user_id: UserId,
    pub username: String,
    pub user_email: String,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub last_sender: Sender,
    /// Unread lines written by the patient.
    pub unread_count: u64,
}
