use async_trait::async_trait;

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::domain::fields::FieldError;
use crate::modules::appointment::application::domain::schedule::ScheduleError;

#[derive(Debug, Clone, Default)]
pub struct CreateAppointmentInput {
    /// Defaults to the requester. Only admins may book for someone else.
    pub user_id: Option<UserId>,
    pub service_name: String,
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub description: Option<String>,
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateAppointmentError {
    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error(transparent)]
    InvalidSchedule(#[from] ScheduleError),

    #[error("Patients can only book for themselves")]
    Forbidden,

    #[error("User not found")]
    OwnerNotFound,

    #[error("An active appointment already exists on that date")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateAppointmentUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
        input: CreateAppointmentInput,
    ) -> Result<Appointment, CreateAppointmentError>;
}
