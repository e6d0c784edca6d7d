use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Requester;
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::domain::fields::FieldError;
use crate::modules::appointment::application::domain::schedule::ScheduleError;
use crate::modules::appointment::application::domain::status::{
    AppointmentStatus, TransitionError,
};
use crate::modules::appointment::application::ports::outgoing::PatchField;

/// Raw edit as received from the caller.
///
/// Required columns reject `Null`; nullable ones clear on `Null`.
#[derive(Debug, Clone, Default)]
pub struct AppointmentPatch {
    pub service_name: PatchField<String>,
    pub username: PatchField<String>,
    pub email: PatchField<String>,
    pub contact_number: PatchField<String>,
    pub description: PatchField<String>,
    pub medical_history: PatchField<String>,
    pub allergies: PatchField<String>,
    pub date: PatchField<String>,
    pub time: PatchField<String>,
    pub status: Option<AppointmentStatus>,
    pub cancellation_reason: PatchField<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateAppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Access denied")]
    Forbidden,

    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error(transparent)]
    InvalidSchedule(#[from] ScheduleError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error("cancellationReason is required when cancelling")]
    CancellationReasonRequired,

    #[error("An active appointment already exists on that date")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateAppointmentUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
        appointment_id: Uuid,
        patch: AppointmentPatch,
    ) -> Result<Appointment, UpdateAppointmentError>;
}
