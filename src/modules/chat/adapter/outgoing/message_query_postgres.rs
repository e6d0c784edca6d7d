use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait, FromQueryResult,
    PaginatorTrait, QueryFilter, QueryOrder, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::messages::{Column, Entity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::modules::chat::application::domain::conversation::ConversationSummary;
use crate::modules::chat::application::domain::message::{Message, Sender};
use crate::modules::chat::application::ports::outgoing::{MessageQuery, MessageQueryError};

#[derive(Clone)]
pub struct MessageQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Latest line per owner joined with the owner's unread patient lines.
    fn conversation_summaries_stmt() -> Statement {
        Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                latest.user_id,
                latest.username,
                latest.user_email,
                latest.message AS last_message,
                latest.created_at AS last_message_time,
                latest.sender AS last_sender,
                COALESCE(unread.total, 0) AS unread_count
            FROM (
                SELECT DISTINCT ON (user_id)
                    user_id, username, user_email, message, sender, created_at
                FROM messages
                ORDER BY user_id, created_at DESC
            ) AS latest
            LEFT JOIN (
                SELECT user_id, COUNT(*) AS total
                FROM messages
                WHERE sender = 'patient' AND is_read = FALSE
                GROUP BY user_id
            ) AS unread ON unread.user_id = latest.user_id
            ORDER BY latest.created_at DESC
            "#,
        )
    }
}

#[derive(Debug, FromQueryResult)]
struct ConversationSummaryRow {
    user_id: Uuid,
    username: String,
    user_email: String,
    last_message: String,
    last_message_time: DateTimeWithTimeZone,
    last_sender: String,
    unread_count: i64,
}

fn map_summary_row(row: ConversationSummaryRow) -> Result<ConversationSummary, MessageQueryError> {
    let last_sender = row
        .last_sender
        .parse::<Sender>()
        .map_err(|e| MessageQueryError::InvalidRecord(e.to_string()))?;

    Ok(ConversationSummary {
        user_id: UserId::from(row.user_id),
        username: row.username,
        user_email: row.user_email,
        last_message: row.last_message,
        last_message_time: row.last_message_time.into(),
        last_sender,
        unread_count: u64::try_from(row.unread_count).unwrap_or_default(),
    })
}

pub(super) fn map_message_model(model: Model) -> Result<Message, String> {
    let sender = model.sender.parse::<Sender>().map_err(|e| e.to_string())?;

    Ok(Message {
        id: model.id,
        user_id: UserId::from(model.user_id),
        user_email: model.user_email,
        username: model.username,
        message: model.message,
        sender,
        is_read: model.is_read,
        created_at: model.created_at.into(),
    })
}

fn to_domain(models: Vec<Model>) -> Result<Vec<Message>, MessageQueryError> {
    models
        .into_iter()
        .map(|m| map_message_model(m).map_err(MessageQueryError::InvalidRecord))
        .collect()
}

fn db_err(e: sea_orm::DbErr) -> MessageQueryError {
    MessageQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl MessageQuery for MessageQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, MessageQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(db_err)?
            .map(|m| map_message_model(m).map_err(MessageQueryError::InvalidRecord))
            .transpose()
    }

    async fn list_conversation(&self, owner: UserId) -> Result<Vec<Message>, MessageQueryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        to_domain(models)
    }

    async fn count_unread(&self, owner: UserId, sender: Sender) -> Result<u64, MessageQueryError> {
        Entity::find()
            .filter(Column::UserId.eq(owner.value()))
            .filter(Column::Sender.eq(sender.as_str()))
            .filter(Column::IsRead.eq(false))
            .count(&*self.db)
            .await
            .map_err(db_err)
    }

    async fn conversation_summaries(&self) -> Result<Vec<ConversationSummary>, MessageQueryError> {
        ConversationSummaryRow::find_by_statement(Self::conversation_summaries_stmt())
            .all(&*self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(map_summary_row)
            .collect()
    }
}
