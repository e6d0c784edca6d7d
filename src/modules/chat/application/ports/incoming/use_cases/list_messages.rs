use async_trait::async_trait;

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::chat::application::domain::message::Message;
use crate::modules::chat::application::ports::outgoing::MessageQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListMessagesError {
    #[error("Access denied")]
    Forbidden,

    #[error(transparent)]
    QueryError(#[from] MessageQueryError),
}

#[async_trait]
pub trait ListMessagesUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
        owner: UserId,
    ) -> Result<Vec<Message>, ListMessagesError>;
}
