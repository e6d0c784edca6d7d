use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::orchestrator::user_registration::{
    CodeDelivery, UserRegistrationError,
};
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[schema(example = "alice")]
    pub username: String,

    #[schema(example = "alice@example.com")]
    pub email: String,

    #[schema(example = "09171234567")]
    pub contact_number: String,

    /// At least 6 characters
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    /// Needed for `/api/users/verify` and `/api/users/resend-code`
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    user_id: String,
    email: String,
    username: String,
    code_delivery: CodeDelivery,
    message: String,
}

fn map_create_user_error(err: CreateUserError, email: &str) -> HttpResponse {
    match err {
        CreateUserError::MissingField(field) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &format!("{} is required", field))
        }
        CreateUserError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
        CreateUserError::InvalidPassword(msg) => ApiResponse::bad_request("INVALID_PASSWORD", &msg),
        CreateUserError::EmailAlreadyExists => {
            warn!(email = %email, "Registration conflict");
            ApiResponse::conflict("EMAIL_EXISTS", "Email is already registered")
        }
        other => {
            error!(email = %email, error = %other, "Unhandled user creation error");
            ApiResponse::internal_error()
        }
    }
}

/// Register a patient account
///
/// Stores the account unverified and emails a 6-digit code valid for 10 minutes.
/// If the mail server is unavailable the account is still created and
/// `codeDelivery` is `delayed` while delivery is retried in the background.
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "Account created",
            body = inline(SuccessResponse<RegisterUserResponse>),
            example = json!({
                "success": true,
                "data": {
                    "userId": "123e4567-e89b-12d3-a456-426614174000",
                    "email": "alice@example.com",
                    "username": "alice",
                    "codeDelivery": "sent",
                    "message": "Verification code sent to your email"
                }
            })
        ),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (
            status = 409,
            description = "Email already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_EXISTS", "message": "Email is already registered" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email = req.email.clone();

    let input = CreateUserInput {
        username: req.username,
        email: req.email,
        contact_number: req.contact_number,
        password: req.password,
    };

    match data.auth.register.register_user(input).await {
        Ok(output) => {
            info!(user_id = %output.user_id, delivery = ?output.code_delivery, "User registered");
            ApiResponse::created(RegisterUserResponse {
                user_id: output.user_id.to_string(),
                email: output.email,
                username: output.username,
                code_delivery: output.code_delivery,
                message: output.message,
            })
        }
        Err(UserRegistrationError::CreateUserFailed(e)) => map_create_user_error(e, &email),
    }
}
