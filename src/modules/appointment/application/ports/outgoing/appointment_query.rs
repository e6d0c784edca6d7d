use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::domain::status::AppointmentStatus;

/// Read-side selection. Results always come back newest-created first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub owner: Option<UserId>,
    /// Empty means any status.
    pub statuses: Vec<AppointmentStatus>,
}

impl AppointmentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn owned_by(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            statuses: Vec::new(),
        }
    }

    pub fn with_statuses(mut self, statuses: Vec<AppointmentStatus>) -> Self {
        self.statuses = statuses;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid stored appointment: {0}")]
    InvalidRecord(String),
}

#[async_trait]
pub trait AppointmentQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, AppointmentQueryError>;

    async fn list(
        &self,
        filter: AppointmentFilter,
    ) -> Result<Vec<Appointment>, AppointmentQueryError>;
}
