use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::appointment::application::ports::incoming::use_cases::GetSingleAppointmentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::{appointment_not_found, forbidden, AppointmentDto};

#[utoipa::path(
    get,
    path = "/api/booked-services/{id}",
    tag = "appointments",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment", body = inline(SuccessResponse<AppointmentDto>)),
        (status = 403, description = "Not the owner and not an admin", body = ErrorResponse),
        (status = 404, description = "Unknown appointment", body = ErrorResponse),
    )
)]
#[get("/api/booked-services/{id}")]
pub async fn get_single_appointment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.appointment.get_single.execute(user.requester(), id).await {
        Ok(appointment) => ApiResponse::success(AppointmentDto::from(appointment)),
        Err(GetSingleAppointmentError::NotFound) => appointment_not_found(),
        Err(GetSingleAppointmentError::Forbidden) => forbidden(),
        Err(GetSingleAppointmentError::QueryError(e)) => {
            error!(appointment_id = %id, error = %e, "Failed to load appointment");
            ApiResponse::internal_error()
        }
    }
}
