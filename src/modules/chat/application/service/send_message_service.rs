use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{normalize_email, Requester};
use crate::modules::chat::application::domain::message::{validate_body, Message, Sender};
use crate::modules::chat::application::ports::incoming::use_cases::{
    SendMessageError, SendMessageInput, SendMessageUseCase,
};
use crate::modules::chat::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessage,
};

pub struct SendMessageService<R>
where
    R: MessageRepository,
{
    repository: R,
}

impl<R> SendMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn authorize(requester: &Requester, input: &SendMessageInput) -> Result<(), SendMessageError> {
    let allowed = match input.sender {
        Sender::Patient => requester.user_id == input.user_id,
        Sender::Admin => requester.is_admin(),
    };
    if allowed {
        Ok(())
    } else {
        warn!(
            requester = %requester.user_id,
            owner = %input.user_id,
            sender = %input.sender,
            "Message send refused"
        );
        Err(SendMessageError::Forbidden)
    }
}

#[async_trait]
impl<R> SendMessageUseCase for SendMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        input: SendMessageInput,
    ) -> Result<Message, SendMessageError> {
        let user_email = normalize_email(&input.user_email);
        if user_email.is_empty() {
            return Err(SendMessageError::MissingField("userEmail"));
        }
        let username = input.username.trim().to_string();
        if username.is_empty() {
            return Err(SendMessageError::MissingField("username"));
        }
        let body = validate_body(&input.message)?;

        authorize(&requester, &input)?;

        let message = self
            .repository
            .create(NewMessage {
                user_id: input.user_id,
                user_email,
                username,
                message: body,
                sender: input.sender,
                is_read: input.sender.initially_read(),
            })
            .await
            .map_err(|e| match e {
                MessageRepositoryError::OwnerNotFound => SendMessageError::OwnerNotFound,
                other => SendMessageError::RepositoryError(other.to_string()),
            })?;

        info!(message_id = %message.id, owner = %message.user_id, sender = %message.sender, "Chat message stored");
        Ok(message)
    }
}
