use async_trait::async_trait;

use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::auth::application::domain::one_time_code::OneTimeCode;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub password_hash: String,
    pub role: Role,
    pub is_verified: bool,
    pub verification_code: Option<OneTimeCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn set_verification_code(
        &self,
        user_id: UserId,
        code: OneTimeCode,
    ) -> Result<(), UserRepositoryError>;

    /// Marks the account verified and clears the verification code fields.
    async fn mark_verified(&self, user_id: UserId) -> Result<(), UserRepositoryError>;

    async fn set_reset_code(
        &self,
        user_id: UserId,
        code: OneTimeCode,
    ) -> Result<(), UserRepositoryError>;

    /// Stores the new hash and clears the reset code fields in one write.
    async fn reset_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: UserId,
        username: String,
        contact_number: String,
    ) -> Result<User, UserRepositoryError>;

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
