use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::modules::appointment::application::ports::incoming::use_cases::{
    CreateAppointmentError, CreateAppointmentInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::{field_error, forbidden, schedule_error, AppointmentDto};

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    /// Admins only: book on behalf of this account
    #[schema(value_type = Option<String>)]
    pub user_id: Option<Uuid>,
    #[schema(example = "Teeth Cleaning")]
    pub service_name: String,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "09171234567")]
    pub contact_number: String,
    pub description: Option<String>,
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    #[schema(example = "2025-03-17")]
    pub date: String,
    #[schema(example = "10:00 AM")]
    pub time: String,
}

/// Book an appointment
///
/// New bookings start as `pending`. The slot must be in the future and
/// inside clinic hours for that weekday.
#[utoipa::path(
    post,
    path = "/api/booked-services",
    tag = "appointments",
    security(("BearerAuth" = [])),
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Appointment booked", body = inline(SuccessResponse<AppointmentDto>)),
        (status = 400, description = "Invalid field or schedule", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Booking for another account", body = ErrorResponse),
        (status = 409, description = "Active appointment already on that date", body = ErrorResponse),
    )
)]
#[post("/api/booked-services")]
pub async fn create_appointment_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateAppointmentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let input = CreateAppointmentInput {
        user_id: req.user_id.map(UserId::from),
        service_name: req.service_name,
        username: req.username,
        email: req.email,
        contact_number: req.contact_number,
        description: req.description,
        medical_history: req.medical_history,
        allergies: req.allergies,
        date: req.date,
        time: req.time,
    };

    match data.appointment.create.execute(user.requester(), input).await {
        Ok(appointment) => ApiResponse::created(AppointmentDto::from(appointment)),
        Err(CreateAppointmentError::InvalidField(e)) => field_error(&e),
        Err(CreateAppointmentError::InvalidSchedule(e)) => schedule_error(&e),
        Err(CreateAppointmentError::Forbidden) => forbidden(),
        Err(CreateAppointmentError::OwnerNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(CreateAppointmentError::Conflict) => ApiResponse::conflict(
            "APPOINTMENT_CONFLICT",
            "An active appointment already exists on that date",
        ),
        Err(CreateAppointmentError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to book appointment");
            ApiResponse::internal_error()
        }
    }
}
