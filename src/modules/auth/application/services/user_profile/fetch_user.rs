use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::application::use_cases::fetch_profile::{
    FetchUserError, FetchUserProfileUseCase,
};

pub struct FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchUserError> {
        self.query
            .find_by_id(user_id)
            .await?
            .map(UserProfile::from)
            .ok_or(FetchUserError::UserNotFound(user_id))
    }
}
