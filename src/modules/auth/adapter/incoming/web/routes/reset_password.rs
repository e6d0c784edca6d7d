use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::reset_password::{
    ResetPasswordError, ResetPasswordInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::dto::MessageResponse;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "593104")]
    pub code: String,
    #[schema(example = "newsecret1")]
    pub new_password: String,
}

/// Set a new password using a reset code
#[utoipa::path(
    post,
    path = "/api/users/reset-password",
    tag = "users",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Invalid or expired code, or weak password", body = ErrorResponse),
        (status = 404, description = "No account with that email", body = ErrorResponse),
    )
)]
#[post("/api/users/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = ResetPasswordInput {
        email: req.email,
        code: req.code,
        new_password: req.new_password,
    };

    match data.auth.reset_password.execute(input).await {
        Ok(()) => {
            info!("Password reset completed");
            ApiResponse::success(MessageResponse::new("Password reset successful"))
        }
        Err(ResetPasswordError::MissingField(field)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &format!("{} is required", field))
        }
        Err(ResetPasswordError::InvalidPassword(msg)) => {
            ApiResponse::bad_request("INVALID_PASSWORD", &msg)
        }
        Err(ResetPasswordError::InvalidCode) => {
            ApiResponse::bad_request("INVALID_CODE", "Invalid reset code")
        }
        Err(ResetPasswordError::CodeExpired) => {
            ApiResponse::bad_request("CODE_EXPIRED", "Reset code has expired")
        }
        Err(ResetPasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e @ ResetPasswordError::HashingFailed(_))
        | Err(e @ ResetPasswordError::RepositoryError(_)) => {
            error!(error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}
