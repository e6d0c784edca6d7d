use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use super::user_query_postgres::map_user_model;
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::domain::one_time_code::OneTimeCode;
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Single-statement UPDATE by id. Zero affected rows means the user is gone.
    async fn update_columns(
        &self,
        user_id: UserId,
        columns: Vec<(UserColumn, SimpleExpr)>,
    ) -> Result<(), UserRepositoryError> {
        let mut update = UserEntity::update_many()
            .col_expr(UserColumn::UpdatedAt, Expr::value(now()))
            .filter(UserColumn::Id.eq(user_id.value()));
        for (column, value) in columns {
            update = update.col_expr(column, value);
        }

        let res = update.exec(&*self.db).await.map_err(map_db_err)?;
        if res.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserRepositoryError::UserAlreadyExists,
        _ => UserRepositoryError::DatabaseError(e.to_string()),
    }
}

fn to_user(model: super::sea_orm_entity::users::Model) -> Result<User, UserRepositoryError> {
    map_user_model(model).map_err(UserRepositoryError::DatabaseError)
}

fn code_columns(
    hash_column: UserColumn,
    expires_column: UserColumn,
    code: Option<OneTimeCode>,
) -> Vec<(UserColumn, SimpleExpr)> {
    let (hash, expires_at) = match code {
        Some(code) => (
            Some(code.code_hash),
            Some(DateTimeWithTimeZone::from(code.expires_at)),
        ),
        None => (None, None),
    };
    vec![
        (hash_column, Expr::value(hash)),
        (expires_column, Expr::value(expires_at)),
    ]
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let (code_hash, code_expires_at) = match data.verification_code {
            Some(code) => (Some(code.code_hash), Some(code.expires_at.into())),
            None => (None, None),
        };

        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(data.username),
            email: Set(data.email),
            contact_number: Set(data.contact_number),
            password_hash: Set(data.password_hash),
            role: Set(data.role.as_str().to_string()),
            is_verified: Set(data.is_verified),
            verification_code_hash: Set(code_hash),
            verification_code_expires_at: Set(code_expires_at),
            reset_code_hash: Set(None),
            reset_code_expires_at: Set(None),
            created_at: Set(now()),
            updated_at: Set(now()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_db_err)?;
        to_user(inserted)
    }

    async fn set_verification_code(
        &self,
        user_id: UserId,
        code: OneTimeCode,
    ) -> Result<(), UserRepositoryError> {
        self.update_columns(
            user_id,
            code_columns(
                UserColumn::VerificationCodeHash,
                UserColumn::VerificationCodeExpiresAt,
                Some(code),
            ),
        )
        .await
    }

    async fn mark_verified(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let mut columns = code_columns(
            UserColumn::VerificationCodeHash,
            UserColumn::VerificationCodeExpiresAt,
            None,
        );
        columns.push((UserColumn::IsVerified, Expr::value(true)));

        self.update_columns(user_id, columns).await
    }

    async fn set_reset_code(
        &self,
        user_id: UserId,
        code: OneTimeCode,
    ) -> Result<(), UserRepositoryError> {
        self.update_columns(
            user_id,
            code_columns(
                UserColumn::ResetCodeHash,
                UserColumn::ResetCodeExpiresAt,
                Some(code),
            ),
        )
        .await
    }

    async fn reset_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut columns = code_columns(
            UserColumn::ResetCodeHash,
            UserColumn::ResetCodeExpiresAt,
            None,
        );
        columns.push((UserColumn::PasswordHash, Expr::value(password_hash)));

        self.update_columns(user_id, columns).await
    }

    async fn update_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.update_columns(
            user_id,
            vec![(UserColumn::PasswordHash, Expr::value(password_hash))],
        )
        .await
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        username: String,
        contact_number: String,
    ) -> Result<User, UserRepositoryError> {
        let updated = UserEntity::update_many()
            .col_expr(UserColumn::Username, Expr::value(username))
            .col_expr(UserColumn::ContactNumber, Expr::value(contact_number))
            .col_expr(UserColumn::UpdatedAt, Expr::value(now()))
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let model = updated
            .into_iter()
            .next()
            .ok_or(UserRepositoryError::UserNotFound)?;
        to_user(model)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let res = UserEntity::delete_by_id(user_id.value())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}
