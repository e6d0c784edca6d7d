use async_trait::async_trait;
use tracing::warn;

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::chat::application::domain::message::Message;
use crate::modules::chat::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase,
};
use crate::modules::chat::application::ports::outgoing::MessageQuery;

pub struct ListMessagesService<Q>
where
    Q: MessageQuery,
{
    query: Q,
}

impl<Q> ListMessagesService<Q>
where
    Q: MessageQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListMessagesUseCase for ListMessagesService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        owner: UserId,
    ) -> Result<Vec<Message>, ListMessagesError> {
        if !requester.can_act_for(owner) {
            warn!(requester = %requester.user_id, owner = %owner, "Chat access refused");
            return Err(ListMessagesError::Forbidden);
        }

        Ok(self.query.list_conversation(owner).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::modules::chat::application::domain::message::Sender;
    use crate::tests::support::chat_fixtures::{sample_message, MockMessageQueryMock};
    use uuid::Uuid;

    #[tokio::test]
    async fn owner_reads_conversation() {
        let me = UserId::from(Uuid::new_v4());
        let mut query = MockMessageQueryMock::new();
        query
            .expect_list_conversation()
            .withf(move |owner| *owner == me)
            .returning(move |_| {
                Ok(vec![
                    sample_message(me, Sender::Patient, "hi"),
                    sample_message(me, Sender::Admin, "hello"),
                ])
            });

        let messages = ListMessagesService::new(query)
            .execute(Requester::new(me, Role::Patient), me)
            .await
            .unwrap();
        assert_eq!(messages.len(), 2);
    }

    #[tokio::test]
    async fn admin_reads_any_conversation() {
        let mut query = MockMessageQueryMock::new();
        query.expect_list_conversation().returning(|_| Ok(vec![]));

        let result = ListMessagesService::new(query)
            .execute(
                Requester::new(UserId::from(Uuid::new_v4()), Role::Admin),
                UserId::from(Uuid::new_v4()),
            )
            .await;
        assert_eq!(result, Ok(vec![]));
    }

    #[tokio::test]
    async fn other_patient_is_refused() {
        let query = MockMessageQueryMock::new();
        let result = ListMessagesService::new(query)
            .execute(
                Requester::new(UserId::from(Uuid::new_v4()), Role::Patient),
                UserId::from(Uuid::new_v4()),
            )
            .await;
        assert_eq!(result, Err(ListMessagesError::Forbidden));
    }
}
