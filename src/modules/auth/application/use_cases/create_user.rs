use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use email_address::EmailAddress;
use tracing::{info, warn};

use crate::auth::application::domain::entities::{normalize_email, Role, UserId};
use crate::auth::application::domain::one_time_code::OneTimeCode;
use crate::auth::application::ports::incoming::password_policy::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    CodeGenerator, CreateUserData, PasswordHasher, UserQuery, UserRepository,
    UserRepositoryError,
};

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub password: String,
}

/// Carries the plaintext code once so the caller can dispatch it. It is never stored.
#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub verification_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("{0}")]
    InvalidPassword(String),

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
    code_generator: Arc<dyn CodeGenerator>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
        code_generator: Arc<dyn CodeGenerator>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            password_policy,
            code_generator,
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, CreateUserError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CreateUserError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        let username = required(&input.username, "username")?;
        let email = normalize_email(&required(&input.email, "email")?);
        let contact_number = required(&input.contact_number, "contactNumber")?;
        if input.password.is_empty() {
            return Err(CreateUserError::MissingField("password"));
        }

        if !EmailAddress::is_valid(&email) {
            return Err(CreateUserError::InvalidEmail);
        }

        self.password_policy
            .validate(&input.password)
            .map_err(|e| CreateUserError::InvalidPassword(e.to_string()))?;

        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            warn!(email = %email, "Registration rejected: email already registered");
            return Err(CreateUserError::EmailAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let code = self.code_generator.generate();

        let user = self
            .repository
            .create_user(CreateUserData {
                username,
                email,
                contact_number,
                password_hash,
                role: Role::Patient,
                is_verified: false,
                verification_code: Some(OneTimeCode::issue(&code, Utc::now())),
            })
            .await
            .map_err(|e| match e {
                // unique index caught a concurrent registration
                UserRepositoryError::UserAlreadyExists => CreateUserError::EmailAlreadyExists,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "User account created");

        Ok(CreateUserOutput {
            user_id: user.id,
            username: user.username,
            email: user.email,
            verification_code: code,
        })
    }
}
