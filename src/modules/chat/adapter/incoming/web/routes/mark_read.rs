use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::chat::application::ports::incoming::use_cases::MarkReadError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResponse {
    #[schema(example = 2)]
    pub updated_count: u64,
}

/// Mark the clinic's replies as read
#[utoipa::path(
    put,
    path = "/api/messages/{user_id}/mark-read",
    tag = "chat",
    security(("BearerAuth" = [])),
    params(("user_id" = String, Path, description = "Conversation owner")),
    responses(
        (status = 200, description = "Number of messages flipped", body = inline(SuccessResponse<MarkReadResponse>)),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
    )
)]
#[put("/api/messages/{user_id}/mark-read")]
pub async fn mark_read_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(path.into_inner());

    match data.chat.mark_read.execute(user.requester(), owner).await {
        Ok(updated_count) => ApiResponse::success(MarkReadResponse { updated_count }),
        Err(MarkReadError::Forbidden) => ApiResponse::forbidden("FORBIDDEN", "Access denied"),
        Err(MarkReadError::RepositoryError(e)) => {
            error!(owner = %owner, error = %e, "Failed to mark messages read");
            ApiResponse::internal_error()
        }
    }
}
