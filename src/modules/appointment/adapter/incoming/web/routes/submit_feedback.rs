use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::appointment::application::ports::incoming::use_cases::{
    FeedbackInput, SubmitFeedbackError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::{appointment_not_found, forbidden, AppointmentDto};

#[derive(Deserialize, ToSchema)]
pub struct SubmitFeedbackRequest {
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: i64,
    #[serde(default, alias = "comment")]
    #[schema(example = "Very gentle, thank you!")]
    pub feedback: Option<String>,
}

/// Rate an appointment
///
/// Allowed once the appointment is accepted or completed. Submitting again
/// replaces the earlier rating.
#[utoipa::path(
    post,
    path = "/api/feedback/{appointment_id}",
    tag = "feedback",
    security(("BearerAuth" = [])),
    params(("appointment_id" = String, Path, description = "Appointment id")),
    request_body = SubmitFeedbackRequest,
    responses(
        (status = 200, description = "Appointment with feedback", body = inline(SuccessResponse<AppointmentDto>)),
        (status = 400, description = "Rating out of range or comment too long", body = ErrorResponse),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
        (status = 404, description = "Unknown appointment", body = ErrorResponse),
        (status = 409, description = "Appointment not in a rateable state", body = ErrorResponse),
    )
)]
#[post("/api/feedback/{appointment_id}")]
pub async fn submit_feedback_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<SubmitFeedbackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let req = req.into_inner();
    let input = FeedbackInput {
        rating: req.rating,
        comment: req.feedback,
    };

    match data
        .appointment
        .submit_feedback
        .execute(user.requester(), id, input)
        .await
    {
        Ok(appointment) => {
            info!(appointment_id = %id, "Feedback recorded");
            ApiResponse::success(AppointmentDto::from(appointment))
        }
        Err(e @ SubmitFeedbackError::InvalidRating) => {
            ApiResponse::bad_request("INVALID_RATING", &e.to_string())
        }
        Err(e @ SubmitFeedbackError::CommentTooLong(_)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        Err(SubmitFeedbackError::NotFound) => appointment_not_found(),
        Err(SubmitFeedbackError::Forbidden) => forbidden(),
        Err(e @ SubmitFeedbackError::NotAllowed(_)) => {
            ApiResponse::conflict("FEEDBACK_NOT_ALLOWED", &e.to_string())
        }
        Err(SubmitFeedbackError::RepositoryError(e)) => {
            error!(appointment_id = %id, error = %e, "Failed to store feedback");
            ApiResponse::internal_error()
        }
    }
}
