use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Requester;
use crate::modules::appointment::application::domain::entities::Appointment;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteAppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Access denied")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAppointmentUseCase: Send + Sync {
    /// Hard delete. Returns the record as it was before removal.
    async fn execute(
        &self,
        requester: Requester,
        appointment_id: Uuid,
    ) -> Result<Appointment, DeleteAppointmentError>;
}
