use async_trait::async_trait;

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::ports::outgoing::AppointmentQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetAppointmentsError {
    #[error("Access denied")]
    Forbidden,

    #[error("Query error: {0}")]
    QueryError(#[from] AppointmentQueryError),
}

#[async_trait]
pub trait GetAppointmentsUseCase: Send + Sync {
    /// Without an `owner`, admins see every appointment and patients their own.
    async fn execute(
        &self,
        requester: Requester,
        owner: Option<UserId>,
    ) -> Result<Vec<Appointment>, GetAppointmentsError>;
}
