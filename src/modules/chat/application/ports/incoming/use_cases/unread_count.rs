use async_trait::async_trait;

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::chat::application::ports::outgoing::MessageQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnreadCountError {
    #[error("Access denied")]
    Forbidden,

    #[error(transparent)]
    QueryError(#[from] MessageQueryError),
}

#[async_trait]
pub trait UnreadCountUseCase: Send + Sync {
    async fn execute(&self, requester: Requester, owner: UserId) -> Result<u64, UnreadCountError>;
}
