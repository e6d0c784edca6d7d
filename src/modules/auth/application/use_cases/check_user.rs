use async_trait::async_trait;

use crate::auth::application::domain::entities::normalize_email;
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckUserError {
    #[error("email or username is required")]
    MissingIdentifier,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ICheckUserUseCase: Send + Sync {
    /// True when either identifier is already taken.
    async fn execute(
        &self,
        email: Option<&str>,
        username: Option<&str>,
    ) -> Result<bool, CheckUserError>;
}

pub struct CheckUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> CheckUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[async_trait]
impl<Q> ICheckUserUseCase for CheckUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        email: Option<&str>,
        username: Option<&str>,
    ) -> Result<bool, CheckUserError> {
        let email = non_blank(email).map(normalize_email);
        let username = non_blank(username);
        if email.is_none() && username.is_none() {
            return Err(CheckUserError::MissingIdentifier);
        }

        if let Some(email) = email {
            let found = self
                .query
                .find_by_email(&email)
                .await
                .map_err(|e| CheckUserError::QueryError(e.to_string()))?;
            if found.is_some() {
                return Ok(true);
            }
        }

        if let Some(username) = username {
            let found = self
                .query
                .find_by_username(username)
                .await
                .map_err(|e| CheckUserError::QueryError(e.to_string()))?;
            return Ok(found.is_some());
        }

        Ok(false)
    }
}
