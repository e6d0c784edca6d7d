use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::verify_user_email::VerifyUserEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::MessageResponse;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: Uuid,
    #[schema(example = "482913")]
    pub code: String,
}

/// Confirm an email address with the 6-digit code
#[utoipa::path(
    post,
    path = "/api/users/verify",
    tag = "users",
    request_body = VerifyEmailRequest,
    responses(
        (status = 200, description = "Email verified", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Wrong or expired code", body = ErrorResponse),
        (status = 404, description = "Unknown user", body = ErrorResponse),
        (status = 409, description = "Already verified", body = ErrorResponse),
    )
)]
#[post("/api/users/verify")]
pub async fn verify_user_email_handler(
    req: web::Json<VerifyEmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(req.user_id);

    match data.auth.verify_email.execute(user_id, &req.code).await {
        Ok(()) => {
            info!(user_id = %user_id, "Email verified");
            ApiResponse::success(MessageResponse::new("Email verified successfully"))
        }
        Err(VerifyUserEmailError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(VerifyUserEmailError::AlreadyVerified) => {
            ApiResponse::conflict("ALREADY_VERIFIED", "Email is already verified")
        }
        Err(VerifyUserEmailError::InvalidCode) => {
            warn!(user_id = %user_id, "Verification code mismatch");
            ApiResponse::bad_request("INVALID_CODE", "Invalid verification code")
        }
        Err(VerifyUserEmailError::CodeExpired) => {
            ApiResponse::bad_request("CODE_EXPIRED", "Verification code has expired")
        }
        Err(VerifyUserEmailError::RepositoryError(e)) => {
            error!(user_id = %user_id, error = %e, "Verification failed");
            ApiResponse::internal_error()
        }
    }
}
