use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::appointment::application::ports::incoming::use_cases::ListFeedbackEligibleError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{forbidden, to_dtos, AppointmentDto};

/// Appointments the account can still rate
///
/// Accepted and completed appointments of the given account.
#[utoipa::path(
    get,
    path = "/api/feedback/{user_id}",
    tag = "feedback",
    security(("BearerAuth" = [])),
    params(("user_id" = String, Path, description = "Owner account id")),
    responses(
        (status = 200, description = "Eligible appointments", body = inline(SuccessResponse<Vec<AppointmentDto>>)),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
    )
)]
#[get("/api/feedback/{user_id}")]
pub async fn get_feedback_eligible_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(path.into_inner());

    match data
        .appointment
        .feedback_eligible
        .execute(user.requester(), owner)
        .await
    {
        Ok(items) => ApiResponse::success(to_dtos(items)),
        Err(ListFeedbackEligibleError::Forbidden) => forbidden(),
        Err(ListFeedbackEligibleError::QueryError(e)) => {
            error!(owner = %owner, error = %e, "Failed to list feedback candidates");
            ApiResponse::internal_error()
        }
    }
}
