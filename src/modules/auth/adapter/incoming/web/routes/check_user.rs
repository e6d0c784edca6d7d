use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::check_user::CheckUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CheckUserRequest {
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CheckUserResponse {
    exists: bool,
}

/// Whether an email or username is already taken
#[utoipa::path(
    post,
    path = "/api/users/check",
    tag = "users",
    request_body = CheckUserRequest,
    responses(
        (status = 200, description = "Lookup result", body = inline(SuccessResponse<CheckUserResponse>)),
        (status = 400, description = "Neither field supplied", body = ErrorResponse),
    )
)]
#[post("/api/users/check")]
pub async fn check_user_handler(
    req: web::Json<CheckUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let result = data
        .auth
        .check_user
        .execute(req.email.as_deref(), req.username.as_deref())
        .await;

    match result {
        Ok(exists) => ApiResponse::success(CheckUserResponse { exists }),
        Err(CheckUserError::MissingIdentifier) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "email or username is required")
        }
        Err(CheckUserError::QueryError(e)) => {
            error!(error = %e, "User check failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubCheckUser;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn reports_taken_identifier() {
        let app_state = TestAppStateBuilder::default()
            .with_check_user(StubCheckUser(Ok(true)))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(check_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/users/check")
            .set_json(serde_json::json!({ "username": "alice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["exists"], true);
    }

    #[actix_web::test]
    async fn empty_body_is_400() {
        let app_state = TestAppStateBuilder::default()
            .with_check_user(StubCheckUser(Err(CheckUserError::MissingIdentifier)))
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(check_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/users/check")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
