use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Requester;
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::ports::outgoing::AppointmentQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetSingleAppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Access denied")]
    Forbidden,

    #[error("Query error: {0}")]
    QueryError(#[from] AppointmentQueryError),
}

#[async_trait]
pub trait GetSingleAppointmentUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
        appointment_id: Uuid,
    ) -> Result<Appointment, GetSingleAppointmentError>;
}
