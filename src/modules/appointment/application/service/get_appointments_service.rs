use async_trait::async_trait;

use crate::auth::application::domain::entities::{Requester, UserId};
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::ports::incoming::use_cases::{
    GetAppointmentsError, GetAppointmentsUseCase,
};
use crate::modules::appointment::application::ports::outgoing::{
    AppointmentFilter, AppointmentQuery,
};

pub struct GetAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    query: Q,
}

impl<Q> GetAppointmentsService<Q>
where
    Q: AppointmentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAppointmentsUseCase for GetAppointmentsService<Q>
where
    Q: AppointmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        owner: Option<UserId>,
    ) -> Result<Vec<Appointment>, GetAppointmentsError> {
        let filter = match owner {
            Some(owner) if requester.can_act_for(owner) => AppointmentFilter::owned_by(owner),
            Some(_) => return Err(GetAppointmentsError::Forbidden),
            None if requester.is_admin() => AppointmentFilter::all(),
            None => AppointmentFilter::owned_by(requester.user_id),
        };

        Ok(self.query.list(filter).await?)
    }
}
