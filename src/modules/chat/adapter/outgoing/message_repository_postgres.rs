use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use super::message_query_postgres::map_message_model;
use super::sea_orm_entity::messages::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::chat::application::domain::message::{Message, Sender};
use crate::modules::chat::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessage,
};

#[derive(Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> MessageRepositoryError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => MessageRepositoryError::OwnerNotFound,
        _ => MessageRepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn create(&self, data: NewMessage) -> Result<Message, MessageRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id.value()),
            user_email: Set(data.user_email),
            username: Set(data.username),
            message: Set(data.message),
            sender: Set(data.sender.as_str().to_string()),
            is_read: Set(data.is_read),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        map_message_model(inserted).map_err(MessageRepositoryError::DatabaseError)
    }

    async fn mark_read(&self, owner: UserId, sender: Sender) -> Result<u64, MessageRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::UserId.eq(owner.value()))
            .filter(Column::Sender.eq(sender.as_str()))
            .filter(Column::IsRead.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Uuid) -> Result<(), MessageRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MessageRepositoryError::NotFound);
        }
        Ok(())
    }
}
