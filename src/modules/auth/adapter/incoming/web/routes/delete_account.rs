use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::delete_user::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info};

use super::dto::MessageResponse;

/// Permanently delete the calling account
///
/// Appointments and chat messages owned by the account are removed with it.
#[utoipa::path(
    delete,
    path = "/api/users/delete-account",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Account deleted", body = inline(SuccessResponse<MessageResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account already gone", body = ErrorResponse),
    )
)]
#[delete("/api/users/delete-account")]
pub async fn delete_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.delete_user.execute(user.user_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Account deleted by owner");
            ApiResponse::success(MessageResponse::new("Account deleted successfully"))
        }
        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(DeleteUserError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}
