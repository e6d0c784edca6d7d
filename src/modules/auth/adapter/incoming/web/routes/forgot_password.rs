use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::forgot_password::ForgotPasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::error;

use super::dto::MessageResponse;
use super::resend_code::EmailRequest;

/// Email a password reset code
#[utoipa::path(
    post,
    path = "/api/users/forgot-password",
    tag = "users",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Reset code sent", body = inline(SuccessResponse<MessageResponse>)),
        (status = 404, description = "No account with that email", body = ErrorResponse),
        (status = 503, description = "Mail server unavailable", body = ErrorResponse),
    )
)]
#[post("/api/users/forgot-password")]
pub async fn forgot_password_handler(
    req: web::Json<EmailRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.forgot_password.execute(&req.email).await {
        Ok(()) => ApiResponse::success(MessageResponse::new(
            "Password reset code sent to your email",
        )),
        Err(ForgotPasswordError::MissingEmail) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "email is required")
        }
        Err(ForgotPasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ForgotPasswordError::DeliveryFailed(e)) => {
            error!(error = %e, "Reset code delivery failed");
            ApiResponse::service_unavailable(
                "EMAIL_DELIVERY_FAILED",
                "Could not send the reset email, please try again",
            )
        }
        Err(ForgotPasswordError::RepositoryError(e)) => {
            error!(error = %e, "Forgot password failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubForgotPassword;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn unknown_email_is_404() {
        let app_state = TestAppStateBuilder::default()
            .with_forgot_password(StubForgotPassword(Err(ForgotPasswordError::UserNotFound)))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(forgot_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/forgot-password")
            .set_json(serde_json::json!({ "email": "ghost@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn sends_code() {
        let app_state = TestAppStateBuilder::default()
            .with_forgot_password(StubForgotPassword(Ok(())))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(forgot_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/forgot-password")
            .set_json(serde_json::json!({ "email": "alice@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["message"], "Password reset code sent to your email");
    }
}
