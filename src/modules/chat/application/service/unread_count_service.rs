use async_trait::async_trait;

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::chat::application::domain::message::Sender;
use crate::modules::chat::application::ports::incoming::use_cases::{
    UnreadCountError, UnreadCountUseCase,
};
use crate::modules::chat::application::ports::outgoing::MessageQuery;

pub struct UnreadCountService<Q>
where
    Q: MessageQuery,
{
    query: Q,
}

impl<Q> UnreadCountService<Q>
where
    Q: MessageQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> UnreadCountUseCase for UnreadCountService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(&self, requester: Requester, owner: UserId) -> Result<u64, UnreadCountError> {
        if !requester.can_act_for(owner) {
            return Err(UnreadCountError::Forbidden);
        }

        Ok(self.query.count_unread(owner, Sender::Admin).await?)
    }
}
