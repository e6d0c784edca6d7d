use async_trait::async_trait;

use crate::auth::application::domain::entities::Requester;
use crate::modules::chat::application::domain::conversation::ConversationSummary;
use crate::modules::chat::application::ports::outgoing::MessageQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListConversationsError {
    #[error("Administrator access required")]
    Forbidden,

    #[error(transparent)]
    QueryError(#[from] MessageQueryError),
}

#[async_trait]
pub trait ListConversationsUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
    ) -> Result<Vec<ConversationSummary>, ListConversationsError>;
}
