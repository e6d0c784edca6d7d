use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Requester;
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::domain::status::AppointmentStatus;

#[derive(Debug, Clone)]
pub struct FeedbackInput {
    pub rating: i64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitFeedbackError {
    #[error("rating must be a whole number from 1 to 5")]
    InvalidRating,

    #[error("feedback must be at most {0} characters")]
    CommentTooLong(usize),

    #[error("Appointment not found")]
    NotFound,

    #[error("Access denied")]
    Forbidden,

    #[error("Feedback is only accepted for accepted or completed appointments, not {0}")]
    NotAllowed(AppointmentStatus),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitFeedbackUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Requester,
        appointment_id: Uuid,
        input: FeedbackInput,
    ) -> Result<Appointment, SubmitFeedbackError>;
}
