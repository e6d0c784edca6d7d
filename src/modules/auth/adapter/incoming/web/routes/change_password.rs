use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::MessageResponse;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[utoipa::path(
    put,
    path = "/api/users/change-password",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Weak or missing password", body = ErrorResponse),
        (status = 401, description = "Current password wrong, or bad token", body = ErrorResponse),
    )
)]
#[put("/api/users/change-password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = ChangePasswordInput {
        user_id: user.user_id,
        current_password: req.current_password,
        new_password: req.new_password,
    };

    match data.auth.change_password.execute(input).await {
        Ok(()) => ApiResponse::success(MessageResponse::new("Password changed successfully")),
        Err(ChangePasswordError::MissingField(field)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &format!("{} is required", field))
        }
        Err(ChangePasswordError::InvalidPassword(msg)) => {
            ApiResponse::bad_request("INVALID_PASSWORD", &msg)
        }
        Err(ChangePasswordError::InvalidCurrentPassword) => ApiResponse::unauthorized(
            "INVALID_CURRENT_PASSWORD",
            "Current password is incorrect",
        ),
        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
