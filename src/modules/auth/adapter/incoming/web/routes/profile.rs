use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::UserProfileDto;

/// Profile of the calling account
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<UserProfileDto>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/users/profile")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(UserProfileDto::from(profile)),
        Err(FetchUserError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(FetchUserError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Profile lookup failed");
            ApiResponse::internal_error()
        }
    }
}
