mod delete_message;
mod list_conversations;
mod list_messages;
mod mark_read;
mod send_message;
mod unread_count;

pub use delete_message::{DeleteMessageError, DeleteMessageUseCase};
pub use list_conversations::{ListConversationsError, ListConversationsUseCase};
pub use list_messages::{ListMessagesError, ListMessagesUseCase};
pub use mark_read::{MarkReadError, MarkReadUseCase};
pub use send_message::{SendMessageError, SendMessageInput, SendMessageUseCase};
pub use unread_count::{UnreadCountError, UnreadCountUseCase};
