use async_trait::async_trait;

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::ports::outgoing::AppointmentQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListFeedbackEligibleError {
    #[error("Access denied")]
    Forbidden,

    #[error("Query error: {0}")]
    QueryError(#[from] AppointmentQueryError),
}

#[async_trait]
pub trait ListFeedbackEligibleUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
        owner: UserId,
    ) -> Result<Vec<Appointment>, ListFeedbackEligibleError>;
}
