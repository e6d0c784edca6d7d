use async_trait::async_trait;
use tracing::{debug, warn};

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::chat::application::domain::message::Sender;
use crate::modules::chat::application::ports::incoming::use_cases::{
    MarkReadError, MarkReadUseCase,
};
use crate::modules::chat::application::ports::outgoing::MessageRepository;

pub struct MarkReadService<R>
where
    R: MessageRepository,
{
    repository: R,
}

impl<R> MarkReadService<R>
where
    R: MessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkReadUseCase for MarkReadService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, requester: Requester, owner: UserId) -> Result<u64, MarkReadError> {
        if !requester.can_act_for(owner) {
            warn!(requester = %requester.user_id, owner = %owner, "Chat access refused");
            return Err(MarkReadError::Forbidden);
        }

        let updated = self
            .repository
            .mark_read(owner, Sender::Admin)
            .await
            .map_err(|e| MarkReadError::RepositoryError(e.to_string()))?;

        debug!(owner = %owner, updated, "Marked admin messages read");
        Ok(updated)
    }
}
