use async_trait::async_trait;

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::domain::status::AppointmentStatus;
use crate::modules::appointment::application::ports::incoming::use_cases::{
    ListFeedbackEligibleError, ListFeedbackEligibleUseCase,
};
use crate::modules::appointment::application::ports::outgoing::{
    AppointmentFilter, AppointmentQuery,
};

pub struct ListFeedbackEligibleService<Q>
where
    Q: AppointmentQuery,
{
    query: Q,
}

impl<Q> ListFeedbackEligibleService<Q>
where
    Q: AppointmentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListFeedbackEligibleUseCase for ListFeedbackEligibleService<Q>
where
    Q: AppointmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        owner: UserId,
    ) -> Result<Vec<Appointment>, ListFeedbackEligibleError> {
        if !requester.can_act_for(owner) {
            return Err(ListFeedbackEligibleError::Forbidden);
        }

        let filter =
            AppointmentFilter::owned_by(owner).with_statuses(AppointmentStatus::feedback_eligible());
        Ok(self.query.list(filter).await?)
    }
}
