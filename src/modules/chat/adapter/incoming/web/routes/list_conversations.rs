use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::chat::application::ports::incoming::use_cases::ListConversationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::ConversationDto;

/// Admin inbox
///
/// One row per patient conversation, most recent activity first.
#[utoipa::path(
    get,
    path = "/api/messages/admin/all",
    tag = "chat",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Conversation summaries", body = inline(SuccessResponse<Vec<ConversationDto>>)),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
    )
)]
#[get("/api/messages/admin/all")]
pub async fn list_conversations_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.chat.conversations.execute(user.requester()).await {
        Ok(summaries) => ApiResponse::success(
            summaries
                .into_iter()
                .map(ConversationDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(ListConversationsError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_REQUIRED", "Administrator access required")
        }
        Err(ListConversationsError::QueryError(e)) => {
            error!(error = %e, "Failed to build conversation list");
            ApiResponse::internal_error()
        }
    }
}
