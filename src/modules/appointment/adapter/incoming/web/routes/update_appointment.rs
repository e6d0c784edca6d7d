use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::appointment::application::domain::status::AppointmentStatus;
use crate::modules::appointment::application::ports::incoming::use_cases::{
    AppointmentPatch, UpdateAppointmentError,
};
use crate::modules::appointment::application::ports::outgoing::PatchField;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::dto::{
    appointment_not_found, field_error, forbidden, schedule_error, transition_error,
    AppointmentDto,
};

/// Partial edit. Omitted keys are left alone; `null` clears optional text.
#[derive(Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAppointmentRequest {
    #[schema(value_type = Option<String>)]
    pub service_name: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub username: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub contact_number: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub medical_history: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub allergies: PatchField<String>,
    #[schema(value_type = Option<String>, example = "2025-03-18")]
    pub date: PatchField<String>,
    #[schema(value_type = Option<String>, example = "2:00 PM")]
    pub time: PatchField<String>,
    pub status: Option<AppointmentStatus>,
    #[schema(value_type = Option<String>)]
    pub cancellation_reason: PatchField<String>,
}

impl From<UpdateAppointmentRequest> for AppointmentPatch {
    fn from(req: UpdateAppointmentRequest) -> Self {
        Self {
            service_name: req.service_name,
            username: req.username,
            email: req.email,
            contact_number: req.contact_number,
            description: req.description,
            medical_history: req.medical_history,
            allergies: req.allergies,
            date: req.date,
            time: req.time,
            status: req.status,
            cancellation_reason: req.cancellation_reason,
        }
    }
}

fn map_update_error(err: UpdateAppointmentError, id: Uuid) -> HttpResponse {
    match err {
        UpdateAppointmentError::NotFound => appointment_not_found(),
        UpdateAppointmentError::Forbidden => forbidden(),
        UpdateAppointmentError::InvalidField(e) => field_error(&e),
        UpdateAppointmentError::InvalidSchedule(e) => schedule_error(&e),
        UpdateAppointmentError::Transition(e) => {
            warn!(appointment_id = %id, error = %e, "Rejected status change");
            transition_error(&e)
        }
        UpdateAppointmentError::CancellationReasonRequired => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "cancellationReason is required when cancelling",
        ),
        UpdateAppointmentError::Conflict => ApiResponse::conflict(
            "APPOINTMENT_CONFLICT",
            "An active appointment already exists on that date",
        ),
        UpdateAppointmentError::RepositoryError(e) => {
            error!(appointment_id = %id, error = %e, "Failed to update appointment");
            ApiResponse::internal_error()
        }
    }
}

/// Edit an appointment
///
/// Editing a cancelled appointment without cancelling it again moves it to
/// `rescheduled`. Only admins may accept or complete. Completed appointments
/// are frozen.
#[utoipa::path(
    put,
    path = "/api/booked-services/{id}",
    tag = "appointments",
    security(("BearerAuth" = [])),
    params(("id" = String, Path, description = "Appointment id")),
    request_body = UpdateAppointmentRequest,
    responses(
        (status = 200, description = "Updated appointment", body = inline(SuccessResponse<AppointmentDto>)),
        (status = 400, description = "Invalid field, schedule or missing cancellation reason", body = ErrorResponse),
        (status = 403, description = "Not allowed for this caller", body = ErrorResponse),
        (status = 404, description = "Unknown appointment", body = ErrorResponse),
        (status = 409, description = "Status change not allowed or date conflict", body = ErrorResponse),
    )
)]
#[put("/api/booked-services/{id}")]
pub async fn update_appointment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateAppointmentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let patch = AppointmentPatch::from(req.into_inner());

    match data
        .appointment
        .update
        .execute(user.requester(), id, patch)
        .await
    {
        Ok(appointment) => ApiResponse::success(AppointmentDto::from(appointment)),
        Err(e) => map_update_error(e, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{Role, UserId};
    use crate::modules::appointment::application::domain::status::TransitionError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::appointment_fixtures::sample_appointment;
    use crate::tests::support::auth_helper::{bearer_for, test_token_provider};
    use crate::tests::support::stubs::StubUpdateAppointment;
    use actix_web::{test, App};

    async fn call(
        stub: StubUpdateAppointment,
        body: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let app_state = TestAppStateBuilder::default()
            .with_update_appointment(stub)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(update_appointment_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/booked-services/{}", Uuid::new_v4()))
            .insert_header((
                "Authorization",
                bearer_for(UserId::from(Uuid::new_v4()), Role::Admin),
            ))
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[::core::prelude::v1::test]
    fn request_distinguishes_missing_from_null() {
        let req: UpdateAppointmentRequest = serde_json::from_value(serde_json::json!({
            "allergies": null,
            "time": "2:00 PM",
            "status": "cancelled"
        }))
        .unwrap();

        assert_eq!(req.allergies, PatchField::Null);
        assert_eq!(req.time, PatchField::Value("2:00 PM".to_string()));
        assert!(req.description.is_unset());
        assert_eq!(req.status, Some(AppointmentStatus::Cancelled));
    }

    #[actix_web::test]
    async fn returns_updated_appointment() {
        let mut appointment =
            sample_appointment(UserId::from(Uuid::new_v4()), AppointmentStatus::Accepted);
        appointment.time = "2:00 PM".to_string();

        let resp = call(
            StubUpdateAppointment(Ok(appointment)),
            serde_json::json!({ "status": "accepted", "time": "2:00 PM" }),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["status"], "accepted");
        assert_eq!(body["data"]["time"], "2:00 PM");
    }

    #[actix_web::test]
    async fn completed_appointment_is_409() {
        let resp = call(
            StubUpdateAppointment(Err(UpdateAppointmentError::Transition(
                TransitionError::Completed,
            ))),
            serde_json::json!({ "status": "cancelled" }),
        )
        .await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "APPOINTMENT_COMPLETED");
    }

    #[actix_web::test]
    async fn patient_accepting_is_403() {
        let resp = call(
            StubUpdateAppointment(Err(UpdateAppointmentError::Transition(
                TransitionError::AdminRequired(AppointmentStatus::Accepted),
            ))),
            serde_json::json!({ "status": "accepted" }),
        )
        .await;
        assert_eq!(resp.status(), 403);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ADMIN_REQUIRED");
    }

    #[actix_web::test]
    async fn cancelling_without_reason_is_400() {
        let resp = call(
            StubUpdateAppointment(Err(UpdateAppointmentError::CancellationReasonRequired)),
            serde_json::json!({ "status": "cancelled" }),
        )
        .await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn unknown_appointment_is_404() {
        let resp = call(
            StubUpdateAppointment(Err(UpdateAppointmentError::NotFound)),
            serde_json::json!({ "notes": "x" }),
        )
        .await;
        assert_eq!(resp.status(), 404);
    }
}
