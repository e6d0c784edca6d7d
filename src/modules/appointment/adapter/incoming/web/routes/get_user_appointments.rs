use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::appointment::application::ports::incoming::use_cases::GetAppointmentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{forbidden, to_dtos, AppointmentDto};

/// Appointments belonging to one account
#[utoipa::path(
    get,
    path = "/api/booked-services/user/{user_id}",
    tag = "appointments",
    security(("BearerAuth" = [])),
    params(("user_id" = String, Path, description = "Owner account id")),
    responses(
        (status = 200, description = "Appointments, newest first", body = inline(SuccessResponse<Vec<AppointmentDto>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
    )
)]
#[get("/api/booked-services/user/{user_id}")]
pub async fn get_user_appointments_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let owner = UserId::from(path.into_inner());

    match data
        .appointment
        .get_list
        .execute(user.requester(), Some(owner))
        .await
    {
        Ok(items) => ApiResponse::success(to_dtos(items)),
        Err(GetAppointmentsError::Forbidden) => forbidden(),
        Err(GetAppointmentsError::QueryError(e)) => {
            error!(owner = %owner, error = %e, "Failed to list appointments");
            ApiResponse::internal_error()
        }
    }
}
