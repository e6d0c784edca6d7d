use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::auth::application::domain::one_time_code::OneTimeCode;
use crate::auth::application::ports::outgoing::{
    CodeGenerator, CreateUserData, HashError, PasswordHasher, UserQuery, UserQueryError,
    UserRepository, UserRepositoryError,
};
use crate::email::application::ports::outgoing::{
    CodeRecipient, UserEmailNotificationError, UserEmailNotifier,
};

/* --------------------------------------------------
 * mockall doubles for auth ports
 * -------------------------------------------------- */

mock! {
    pub UserQueryMock {}

    #[async_trait]
    impl UserQuery for UserQueryMock {
        async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
    }
}

mock! {
    pub UserRepositoryMock {}

    #[async_trait]
    impl UserRepository for UserRepositoryMock {
        async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;
        async fn set_verification_code(&self, user_id: UserId, code: OneTimeCode) -> Result<(), UserRepositoryError>;
        async fn mark_verified(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
        async fn set_reset_code(&self, user_id: UserId, code: OneTimeCode) -> Result<(), UserRepositoryError>;
        async fn reset_password(&self, user_id: UserId, password_hash: String) -> Result<(), UserRepositoryError>;
        async fn update_password(&self, user_id: UserId, password_hash: String) -> Result<(), UserRepositoryError>;
        async fn update_profile(&self, user_id: UserId, username: String, contact_number: String) -> Result<User, UserRepositoryError>;
        async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
    }
}

mock! {
    pub UserEmailNotifierMock {}

    #[async_trait]
    impl UserEmailNotifier for UserEmailNotifierMock {
        async fn send_verification_code(&self, recipient: &CodeRecipient, code: &str) -> Result<(), UserEmailNotificationError>;
        async fn send_password_reset_code(&self, recipient: &CodeRecipient, code: &str) -> Result<(), UserEmailNotificationError>;
    }
}

/* --------------------------------------------------
 * Lightweight fakes
 * -------------------------------------------------- */

/// Always yields the same code so tests can submit it back.
pub struct FixedCodeGenerator(pub &'static str);

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

/// Reversible "hash" so tests avoid Argon2 cost.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
        Err(HashError::HashFailed)
    }

    async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
        Err(HashError::VerifyFailed)
    }
}

/* --------------------------------------------------
 * Sample records
 * -------------------------------------------------- */

pub fn sample_user() -> User {
    let now = Utc::now();

    User {
        id: UserId::from(Uuid::new_v4()),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        contact_number: "09171234567".to_string(),
        password_hash: "hashed:secret123".to_string(),
        role: Role::Patient,
        is_verified: true,
        verification_code: None,
        reset_code: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn unverified_user_with_code(code: &str) -> User {
    User {
        is_verified: false,
        verification_code: Some(OneTimeCode::issue(code, Utc::now())),
        ..sample_user()
    }
}
