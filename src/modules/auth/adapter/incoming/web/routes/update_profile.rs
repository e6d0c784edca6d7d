use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::update_profile::{
    UpdateUserProfileError, UpdateUserProfileInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::UserProfileDto;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "09171234567")]
    pub contact_number: String,
}

#[utoipa::path(
    put,
    path = "/api/users/update-profile",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserProfileDto>)),
        (status = 400, description = "Blank or overlong field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[put("/api/users/update-profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = UpdateUserProfileInput {
        user_id: user.user_id,
        username: req.username,
        contact_number: req.contact_number,
    };

    match data.auth.update_profile.execute(input).await {
        Ok(profile) => ApiResponse::success(UserProfileDto::from(profile)),
        Err(e @ UpdateUserProfileError::MissingField(_))
        | Err(e @ UpdateUserProfileError::TooLong { .. }) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(UpdateUserProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateUserProfileError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
