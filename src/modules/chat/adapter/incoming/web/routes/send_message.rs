use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::chat::application::domain::message::Sender;
use crate::modules::chat::application::ports::incoming::use_cases::{
    SendMessageError, SendMessageInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::MessageDto;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// Conversation owner
    #[schema(value_type = String)]
    pub user_id: Uuid,
    #[schema(example = "alice@example.com")]
    pub user_email: String,
    #[schema(example = "alice")]
    pub username: String,
    /// 1 to 500 characters after trimming
    #[schema(example = "Is my appointment confirmed?")]
    pub message: String,
    pub sender: Sender,
}

/// Post a chat message
///
/// Patients write into their own conversation. Only admins may send as `admin`.
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "chat",
    security(("BearerAuth" = [])),
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<MessageDto>)),
        (status = 400, description = "Missing field, empty or too long message", body = ErrorResponse),
        (status = 403, description = "Sender does not match the caller", body = ErrorResponse),
        (status = 404, description = "Conversation owner does not exist", body = ErrorResponse),
    )
)]
#[post("/api/messages")]
pub async fn send_message_handler(
    user: AuthenticatedUser,
    req: web::Json<SendMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = SendMessageInput {
        user_id: UserId::from(req.user_id),
        user_email: req.user_email,
        username: req.username,
        message: req.message,
        sender: req.sender,
    };

    match data.chat.send.execute(user.requester(), input).await {
        Ok(message) => ApiResponse::created(MessageDto::from(message)),
        Err(e @ (SendMessageError::MissingField(_) | SendMessageError::InvalidBody(_))) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(SendMessageError::Forbidden) => ApiResponse::forbidden("FORBIDDEN", "Access denied"),
        Err(SendMessageError::OwnerNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(SendMessageError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to store message");
            ApiResponse::internal_error()
        }
    }
}
