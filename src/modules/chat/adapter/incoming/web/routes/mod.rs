mod delete_message;
pub mod dto;
mod list_conversations;
mod list_messages;
mod mark_read;
mod send_message;
mod unread_count;

pub use delete_message::*;
pub use list_conversations::*;
pub use list_messages::*;
pub use mark_read::*;
pub use send_message::*;
pub use unread_count::*;
