use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Requester;
use crate::modules::appointment::application::domain::entities::{
    Appointment, Feedback, MAX_FEEDBACK_COMMENT,
};
use crate::modules::appointment::application::ports::incoming::use_cases::{
    FeedbackInput, SubmitFeedbackError, SubmitFeedbackUseCase,
};
use crate::modules::appointment::application::ports::outgoing::{
    AppointmentQuery, AppointmentRepository, AppointmentRepositoryError,
};

pub struct SubmitFeedbackService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> SubmitFeedbackService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

fn validate(input: FeedbackInput) -> Result<Feedback, SubmitFeedbackError> {
    let rating = u8::try_from(input.rating)
        .ok()
        .filter(|r| (1..=5).contains(r))
        .ok_or(SubmitFeedbackError::InvalidRating)?;

    let comment = input
        .comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    if comment
        .as_ref()
        .is_some_and(|c| c.chars().count() > MAX_FEEDBACK_COMMENT)
    {
        return Err(SubmitFeedbackError::CommentTooLong(MAX_FEEDBACK_COMMENT));
    }

    Ok(Feedback { rating, comment })
}

#[async_trait]
impl<Q, R> SubmitFeedbackUseCase for SubmitFeedbackService<Q, R>
where
    Q: AppointmentQuery + Send + Sync,
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        appointment_id: Uuid,
        input: FeedbackInput,
    ) -> Result<Appointment, SubmitFeedbackError> {
        let feedback = validate(input)?;

        let appointment = self
            .query
            .find_by_id(appointment_id)
            .await
            .map_err(|e| SubmitFeedbackError::RepositoryError(e.to_string()))?
            .ok_or(SubmitFeedbackError::NotFound)?;

        if !requester.can_act_for(appointment.user_id) {
            return Err(SubmitFeedbackError::Forbidden);
        }
        if !appointment.status.accepts_feedback() {
            return Err(SubmitFeedbackError::NotAllowed(appointment.status));
        }

        let rating = feedback.rating;
        let updated = self
            .repository
            .set_feedback(appointment_id, feedback)
            .await
            .map_err(|e| match e {
                AppointmentRepositoryError::NotFound => SubmitFeedbackError::NotFound,
                other => SubmitFeedbackError::RepositoryError(other.to_string()),
            })?;

        info!(appointment_id = %appointment_id, rating, "Feedback saved");
        Ok(updated)
    }
}
