use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::chat::application::ports::incoming::use_cases::ListMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::dto::MessageDto;

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PollParams {
    /// Consecutive polls that returned nothing new
    pub idle_polls: Option<u32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub messages: Vec<MessageDto>,
    /// Suggested wait before the next poll
    #[schema(example = 3000)]
    pub poll_after_ms: u64,
}

/// Conversation between one patient and the clinic, oldest first
#[utoipa::path(
    get,
    path = "/api/messages/{user_id}",
    tag = "chat",
    security(("BearerAuth" = [])),
    params(
        ("user_id" = String, Path, description = "Conversation owner"),
        PollParams
    ),
    responses(
        (status = 200, description = "Messages and poll hint", body = inline(SuccessResponse<ConversationResponse>)),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
    )
)]
#[get("/api/messages/{user_id}")]
pub async fn list_messages_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    params: web::Query<PollParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(path.into_inner());

    match data.chat.list.execute(user.requester(), owner).await {
        Ok(messages) => ApiResponse::success(ConversationResponse {
            messages: messages.into_iter().map(MessageDto::from).collect(),
            poll_after_ms: data.polling.poll_after(params.idle_polls.unwrap_or(0)),
        }),
        Err(ListMessagesError::Forbidden) => ApiResponse::forbidden("FORBIDDEN", "Access denied"),
        Err(ListMessagesError::QueryError(e)) => {
            error!(owner = %owner, error = %e, "Failed to load conversation");
            ApiResponse::internal_error()
        }
    }
}
