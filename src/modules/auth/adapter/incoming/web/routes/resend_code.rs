use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::resend_code::ResendCodeError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    #[schema(example = "alice@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResendCodeResponse {
    user_id: String,
    message: String,
}

/// Issue a fresh verification code
#[utoipa::path(
    post,
    path = "/api/users/resend-code",
    tag = "users",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "New code sent", body = inline(SuccessResponse<ResendCodeResponse>)),
        (status = 400, description = "Email missing", body = ErrorResponse),
        (status = 404, description = "No account with that email", body = ErrorResponse),
        (status = 409, description = "Already verified", body = ErrorResponse),
        (status = 503, description = "Mail server unavailable", body = ErrorResponse),
    )
)]
#[post("/api/users/resend-code")]
pub async fn resend_code_handler(
    req: web::Json<EmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.resend_code.execute(&req.email).await {
        Ok(user_id) => {
            info!(user_id = %user_id, "Verification code resent");
            ApiResponse::success(ResendCodeResponse {
                user_id: user_id.to_string(),
                message: "Verification code resent".to_string(),
            })
        }
        Err(ResendCodeError::MissingEmail) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "email is required")
        }
        Err(ResendCodeError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ResendCodeError::AlreadyVerified) => {
            ApiResponse::conflict("ALREADY_VERIFIED", "Email is already verified")
        }
        Err(ResendCodeError::DeliveryFailed(e)) => {
            error!(error = %e, "Verification code delivery failed");
            ApiResponse::service_unavailable(
                "EMAIL_DELIVERY_FAILED",
                "Could not send the verification email, please try again",
            )
        }
        Err(ResendCodeError::RepositoryError(e)) => {
            error!(error = %e, "Resend code failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubResendCode;
    use actix_web::{test, App};
    use uuid::Uuid;

    async fn call(result: Result<UserId, ResendCodeError>) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_resend_code(StubResendCode(result))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(resend_code_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/users/resend-code")
            .set_json(serde_json::json!({ "email": "alice@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_user_id() {
        let user_id = UserId::from(Uuid::new_v4());
        let (status, body) = call(Ok(user_id)).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["userId"], user_id.to_string());
    }

    #[actix_web::test]
    async fn verified_account_is_409() {
        let (status, body) = call(Err(ResendCodeError::AlreadyVerified)).await;
        assert_eq!(status, 409);
        assert_eq!(body["error"]["code"], "ALREADY_VERIFIED");
    }

    #[actix_web::test]
    async fn delivery_failure_is_503() {
        let (status, body) = call(Err(ResendCodeError::DeliveryFailed("smtp".into()))).await;
        assert_eq!(status, 503);
        assert_eq!(body["error"]["code"], "EMAIL_DELIVERY_FAILED");
    }
}
