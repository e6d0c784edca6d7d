use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::appointment::application::domain::entities::{Appointment, Feedback};
use crate::modules::appointment::application::domain::status::AppointmentStatus;

/// Three-state field for partial updates.
///
/// With `#[serde(default)]` on the containing struct an omitted key is
/// `Unset`, an explicit `null` is `Null` and anything else is `Value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub user_id: UserId,
    pub service_name: String,
    pub username: String,
    pub email: String,
    pub contact_number: String,
    pub description: Option<String>,
    pub medical_history: Option<String>,
    pub allergies: Option<String>,
    pub date: NaiveDate,
    pub time: String,
}

/// Already validated column changes. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentChanges {
    pub service_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub description: PatchField<String>,
    pub medical_history: PatchField<String>,
    pub allergies: PatchField<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub cancellation_reason: PatchField<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentRepositoryError {
    #[error("Appointment not found")]
    NotFound,

    /// The referenced user does not exist.
    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Owner already has an active appointment on that date")]
    ActiveAppointmentExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, data: NewAppointment) -> Result<Appointment, AppointmentRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: AppointmentChanges,
    ) -> Result<Appointment, AppointmentRepositoryError>;

    async fn set_feedback(
        &self,
        id: Uuid,
        feedback: Feedback,
    ) -> Result<Appointment, AppointmentRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppointmentRepositoryError>;
}
