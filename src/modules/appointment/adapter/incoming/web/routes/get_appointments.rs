use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::appointment::application::ports::incoming::use_cases::GetAppointmentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::{forbidden, to_dtos, AppointmentDto};

/// List appointments
///
/// Admins see every appointment. Patients only see their own.
#[utoipa::path(
    get,
    path = "/api/booked-services",
    tag = "appointments",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Appointments, newest first", body = inline(SuccessResponse<Vec<AppointmentDto>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/booked-services")]
pub async fn get_appointments_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.appointment.get_list.execute(user.requester(), None).await {
        Ok(items) => ApiResponse::success(to_dtos(items)),
        Err(GetAppointmentsError::Forbidden) => forbidden(),
        Err(GetAppointmentsError::QueryError(e)) => {
            error!(error = %e, "Failed to list appointments");
            ApiResponse::internal_error()
        }
    }
}
