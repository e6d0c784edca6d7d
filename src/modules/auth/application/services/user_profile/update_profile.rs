use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::auth::application::use_cases::update_profile::{
    UpdateUserProfileError, UpdateUserProfileInput, UpdateUserProfileUseCase,
};

const MAX_USERNAME_CHARS: usize = 50;
const MAX_CONTACT_NUMBER_CHARS: usize = 32;

pub struct UpdateUserProfileService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateUserProfileService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn bounded(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<String, UpdateUserProfileError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(UpdateUserProfileError::MissingField(field));
    }
    if value.chars().count() > max {
        return Err(UpdateUserProfileError::TooLong { field, max });
    }
    Ok(value.to_string())
}

#[async_trait]
impl<R> UpdateUserProfileUseCase for UpdateUserProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: UpdateUserProfileInput,
    ) -> Result<UserProfile, UpdateUserProfileError> {
        let username = bounded(&input.username, "username", MAX_USERNAME_CHARS)?;
        let contact_number = bounded(
            &input.contact_number,
            "contactNumber",
            MAX_CONTACT_NUMBER_CHARS,
        )?;

        let user = self
            .repository
            .update_profile(input.user_id, username, contact_number)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateUserProfileError::UserNotFound,
                other => UpdateUserProfileError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Profile updated");
        Ok(UserProfile::from(user))
    }
}
