use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::Requester;
use crate::modules::chat::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase,
};
use crate::modules::chat::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};

pub struct DeleteMessageService<R>
where
    R: MessageRepository,
{
    repository: R,
}

impl<R> DeleteMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteMessageUseCase for DeleteMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        message_id: Uuid,
    ) -> Result<(), DeleteMessageError> {
        if !requester.is_admin() {
            warn!(requester = %requester.user_id, message_id = %message_id, "Non-admin tried to delete a message");
            return Err(DeleteMessageError::Forbidden);
        }

        self.repository
            .delete(message_id)
            .await
            .map_err(|e| match e {
                MessageRepositoryError::NotFound => DeleteMessageError::NotFound,
                other => DeleteMessageError::RepositoryError(other.to_string()),
            })?;

        info!(message_id = %message_id, "Chat message deleted");
        Ok(())
    }
}
