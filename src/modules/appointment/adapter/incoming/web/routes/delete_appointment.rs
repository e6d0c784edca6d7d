use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::appointment::application::ports::incoming::use_cases::DeleteAppointmentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::dto::{appointment_not_found, forbidden, AppointmentDto};

/// Permanently delete an appointment
///
/// Returns the record as it was before deletion.
#[utoipa::path(
    delete,
    path = "/api/booked-services/{id}",
    tag = "appointments",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Deleted appointment", body = inline(SuccessResponse<AppointmentDto>)),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
        (status = 404, description = "Unknown appointment", body = ErrorResponse),
    )
)]
#[delete("/api/booked-services/{id}")]
pub async fn delete_appointment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.appointment.delete.execute(user.requester(), id).await {
        Ok(appointment) => {
            info!(appointment_id = %id, deleted_by = %user.user_id, "Appointment deleted");
            ApiResponse::success(AppointmentDto::from(appointment))
        }
        Err(DeleteAppointmentError::NotFound) => appointment_not_found(),
        Err(DeleteAppointmentError::Forbidden) => forbidden(),
        Err(DeleteAppointmentError::RepositoryError(e)) => {
            error!(appointment_id = %id, error = %e, "Failed to delete appointment");
            ApiResponse::internal_error()
        }
    }
}
