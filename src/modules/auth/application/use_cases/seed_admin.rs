use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::info;

use crate::auth::application::domain::entities::{normalize_email, Role, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::config::AdminSeed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Created(UserId),
    AlreadyPresent(UserId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedAdminError {
    #[error("Invalid admin email")]
    InvalidEmail,

    #[error("Admin password must not be empty")]
    EmptyPassword,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISeedAdminUseCase: Send + Sync {
    async fn execute(&self, seed: &AdminSeed) -> Result<SeedOutcome, SeedAdminError>;
}

/// Creates the first verified admin at startup. An existing account with the
/// same email is left untouched whatever its role.
pub struct SeedAdminUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> SeedAdminUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ISeedAdminUseCase for SeedAdminUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, seed: &AdminSeed) -> Result<SeedOutcome, SeedAdminError> {
        let email = normalize_email(&seed.email);
        if !EmailAddress::is_valid(&email) {
            return Err(SeedAdminError::InvalidEmail);
        }
        if seed.password.is_empty() {
            return Err(SeedAdminError::EmptyPassword);
        }

        if let Some(existing) = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| SeedAdminError::RepositoryError(e.to_string()))?
        {
            return Ok(SeedOutcome::AlreadyPresent(existing.id));
        }

        let password_hash = self
            .password_hasher
            .hash_password(&seed.password)
            .await
            .map_err(|e| SeedAdminError::HashingFailed(e.to_string()))?;

        let created = self
            .repository
            .create_user(CreateUserData {
                username: seed.username.clone(),
                email,
                contact_number: String::new(),
                password_hash,
                role: Role::Admin,
                is_verified: true,
                verification_code: None,
            })
            .await;

        match created {
            Ok(user) => {
                info!(user_id = %user.id, "Admin account seeded");
                Ok(SeedOutcome::Created(user.id))
            }
            // another instance won the race
            Err(UserRepositoryError::UserAlreadyExists) => {
                let existing = self
                    .query
                    .find_by_email(&normalize_email(&seed.email))
                    .await
                    .map_err(|e| SeedAdminError::RepositoryError(e.to_string()))?
                    .ok_or_else(|| {
                        SeedAdminError::RepositoryError("admin vanished after conflict".into())
                    })?;
                Ok(SeedOutcome::AlreadyPresent(existing.id))
            }
            Err(other) => Err(SeedAdminError::RepositoryError(other.to_string())),
        }
    }
}
