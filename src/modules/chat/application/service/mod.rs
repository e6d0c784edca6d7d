mod delete_message_service;
mod list_conversations_service;
mod list_messages_service;
mod mark_read_service;
mod send_message_service;
mod unread_count_service;

pub use delete_message_service::DeleteMessageService;
pub use list_conversations_service::ListConversationsService;
pub use list_messages_service::ListMessagesService;
pub use mark_read_service::MarkReadService;
pub use send_message_service::SendMessageService;
pub use unread_count_service::UnreadCountService;
