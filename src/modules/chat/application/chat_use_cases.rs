use std::sync::Arc;

use crate::modules::chat::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, ListConversationsUseCase, ListMessagesUseCase, MarkReadUseCase,
    SendMessageUseCase, UnreadCountUseCase,
};

#[derive(Clone)]
pub struct ChatUseCases {
    pub list: Arc<dyn ListMessagesUseCase + Send + Sync>,
    pub send: Arc<dyn SendMessageUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkReadUseCase + Send + Sync>,
    pub unread_count: Arc<dyn UnreadCountUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMessageUseCase + Send + Sync>,
    pub conversations: Arc<dyn ListConversationsUseCase + Send + Sync>,
}
