use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::auth::application::domain::one_time_code::OneTimeCode;
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn stored_code(
    hash: Option<String>,
    expires_at: Option<sea_orm::prelude::DateTimeWithTimeZone>,
) -> Option<OneTimeCode> {
    match (hash, expires_at) {
        (Some(code_hash), Some(expires_at)) => Some(OneTimeCode {
            code_hash,
            expires_at: expires_at.with_timezone(&chrono::Utc),
        }),
        _ => None,
    }
}

/// Shared by the query and repository adapters.
pub(super) fn map_user_model(model: UserModel) -> Result<User, String> {
    let role: Role = model
        .role
        .parse()
        .map_err(|e| format!("user {}: {}", model.id, e))?;

    Ok(User {
        id: UserId::from(model.id),
        username: model.username,
        email: model.email,
        contact_number: model.contact_number,
        password_hash: model.password_hash,
        role,
        is_verified: model.is_verified,
        verification_code: stored_code(
            model.verification_code_hash,
            model.verification_code_expires_at,
        ),
        reset_code: stored_code(model.reset_code_hash, model.reset_code_expires_at),
        created_at: model.created_at.with_timezone(&chrono::Utc),
        updated_at: model.updated_at.with_timezone(&chrono::Utc),
    })
}

fn map_optional(model: Option<UserModel>) -> Result<Option<User>, UserQueryError> {
    model
        .map(map_user_model)
        .transpose()
        .map_err(UserQueryError::DatabaseError)
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        map_optional(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        map_optional(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        map_optional(user)
    }
}
