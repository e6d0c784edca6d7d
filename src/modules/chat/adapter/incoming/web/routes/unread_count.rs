use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::chat::application::ports::incoming::use_cases::UnreadCountError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    #[schema(example = 1)]
    pub unread_count: u64,
}

/// Unread replies from the clinic
#[utoipa::path(
    get,
    path = "/api/messages/{user_id}/unread-count",
    tag = "chat",
    security(("BearerAuth" = [])),
    params(("user_id" = String, Path, description = "Conversation owner")),
    responses(
        (status = 200, description = "Unread admin messages", body = inline(SuccessResponse<UnreadCountResponse>)),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
    )
)]
#[get("/api/messages/{user_id}/unread-count")]
pub async fn unread_count_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(path.into_inner());

    match data.chat.unread_count.execute(user.requester(), owner).await {
        Ok(unread_count) => ApiResponse::success(UnreadCountResponse { unread_count }),
        Err(UnreadCountError::Forbidden) => ApiResponse::forbidden("FORBIDDEN", "Access denied"),
        Err(UnreadCountError::QueryError(e)) => {
            error!(owner = %owner, error = %e, "Failed to count unread messages");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::Role;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use crate::tests::support::stubs::StubUnreadCount;
    use actix_web::{test, App};

    async fn call(stub: StubUnreadCount) -> actix_web::dev::ServiceResponse {
        let owner = UserId::from(Uuid::new_v4());
        let app_state = TestAppStateBuilder::default()
            .with_unread_count(stub)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(unread_count_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/messages/{}/unread-count", owner))
            .insert_header(("Authorization", bearer_for(owner, Role::Patient)))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn returns_count() {
        let resp = call(StubUnreadCount(Ok(1))).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["unreadCount"], 1);
    }

    #[actix_web::test]
    async fn foreign_conversation_is_403() {
        let resp = call(StubUnreadCount(Err(UnreadCountError::Forbidden))).await;
        assert_eq!(resp.status(), 403);
    }
}
