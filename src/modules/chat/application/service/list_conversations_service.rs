use async_trait::async_trait;

use crate::auth::application::domain::entities::Requester;
use crate::modules::chat::application::domain::conversation::ConversationSummary;
use crate::modules::chat::application::ports::incoming::use_cases::{
    ListConversationsError, ListConversationsUseCase,
};
use crate::modules::chat::application::ports::outgoing::MessageQuery;

pub struct ListConversationsService<Q>
where
    Q: MessageQuery,
{
    query: Q,
}

impl<Q> ListConversationsService<Q>
where
    Q: MessageQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListConversationsUseCase for ListConversationsService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
    ) -> Result<Vec<ConversationSummary>, ListConversationsError> {
        if !requester.is_admin() {
            return Err(ListConversationsError::Forbidden);
        }

        Ok(self.query.conversation_summaries().await?)
    }
}
