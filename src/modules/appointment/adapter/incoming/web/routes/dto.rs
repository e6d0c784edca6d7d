use actix_web::HttpResponse;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::appointment::application::domain::entities::{Appointment, Feedback};
use crate::modules::appointment::application::domain::fields::FieldError;
use crate::modules::appointment::application::domain::schedule::ScheduleError;
use crate::modules::appointment::application::domain::status::{
    AppointmentStatus, TransitionError,
};
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct FeedbackDto {
    #[schema(example = 5)]
    pub rating: u8,
    #[schema(example = "Very gentle, thank you!")]
    pub feedback: Option<String>,
}

impl From<Feedback> for FeedbackDto {
    fn from(feedback: Feedback) -> Self {
        Self {
            rating: feedback.rating,
            feedback: feedback.comment,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    #[schema(example = "0b6f3c1e-8f55-4d2f-9b7a-6f1b2f3d4e5a")]
    pub id: String,
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub user_id: String,
    #[schema(example = "Teeth Cleaning")]
    pub service_name: String,
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub description: Option<String>,
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    #[schema(value_type = String, example = "2025-03-17")]
    pub date: NaiveDate,
    #[schema(example = "10:00 AM")]
    pub time: String,
    pub status: AppointmentStatus,
    pub cancellation_reason: Option<String>,
    pub feedback: Option<FeedbackDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentDto {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id.to_string(),
            user_id: a.user_id.to_string(),
            service_name: a.service_name,
            username: a.username,
            email: a.email,
            contact_number: a.contact_number,
            description: a.description,
            medical_history: a.medical_history,
            allergies: a.allergies,
            date: a.date,
            time: a.time,
            status: a.status,
            cancellation_reason: a.cancellation_reason,
            feedback: a.feedback.map(FeedbackDto::from),
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

pub fn to_dtos(items: Vec<Appointment>) -> Vec<AppointmentDto> {
    items.into_iter().map(AppointmentDto::from).collect()
}

pub(super) fn field_error(err: &FieldError) -> HttpResponse {
    match err {
        FieldError::InvalidEmail => ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format"),
        other => ApiResponse::bad_request("VALIDATION_ERROR", &other.to_string()),
    }
}

pub(super) fn schedule_error(err: &ScheduleError) -> HttpResponse {
    match err {
        ScheduleError::InvalidDate | ScheduleError::InvalidTime => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
        other => ApiResponse::bad_request("INVALID_SCHEDULE", &other.to_string()),
    }
}

pub(super) fn transition_error(err: &TransitionError) -> HttpResponse {
    match err {
        TransitionError::Completed => {
            ApiResponse::conflict("APPOINTMENT_COMPLETED", &err.to_string())
        }
        TransitionError::NotAllowed { .. } => {
            ApiResponse::conflict("INVALID_STATUS_TRANSITION", &err.to_string())
        }
        TransitionError::AdminRequired(_) => {
            ApiResponse::forbidden("ADMIN_REQUIRED", &err.to_string())
        }
    }
}

pub(super) fn forbidden() -> HttpResponse {
    ApiResponse::forbidden("FORBIDDEN", "Access denied")
}

pub(super) fn appointment_not_found() -> HttpResponse {
    ApiResponse::not_found("APPOINTMENT_NOT_FOUND", "Appointment not found")
}
