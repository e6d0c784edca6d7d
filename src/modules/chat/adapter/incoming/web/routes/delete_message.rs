use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::chat::application::ports::incoming::use_cases::DeleteMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct DeletedResponse {
    pub deleted: bool,
}

/// Remove a chat message (admin)
#[utoipa::path(
    delete,
    path = "/api/messages/{message_id}",
    tag = "chat",
    security(("BearerAuth" = [])),
    params(("message_id" = String, Path, description = "Message id")),
    responses(
        (status = 200, description = "Message removed", body = inline(SuccessResponse<DeletedResponse>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "Unknown message", body = ErrorResponse),
    )
)]
#[delete("/api/messages/{message_id}")]
pub async fn delete_message_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data.chat.delete.execute(user.requester(), message_id).await {
        Ok(()) => ApiResponse::success(DeletedResponse { deleted: true }),
        Err(DeleteMessageError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_REQUIRED", "Administrator access required")
        }
        Err(DeleteMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Message not found")
        }
        Err(DeleteMessageError::RepositoryError(e)) => {
            error!(message_id = %message_id, error = %e, "Failed to delete message");
            ApiResponse::internal_error()
        }
    }
}
