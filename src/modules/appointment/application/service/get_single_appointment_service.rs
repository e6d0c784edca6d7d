use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Requester;
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::ports::incoming::use_cases::{
    GetSingleAppointmentError, GetSingleAppointmentUseCase,
};
use crate::modules::appointment::application::ports::outgoing::AppointmentQuery;

pub struct GetSingleAppointmentService<Q>
where
    Q: AppointmentQuery,
{
    query: Q,
}

impl<Q> GetSingleAppointmentService<Q>
where
    Q: AppointmentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleAppointmentUseCase for GetSingleAppointmentService<Q>
where
    Q: AppointmentQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        appointment_id: Uuid,
    ) -> Result<Appointment, GetSingleAppointmentError> {
        let appointment = self
            .query
            .find_by_id(appointment_id)
            .await?
            .ok_or(GetSingleAppointmentError::NotFound)?;

        if !requester.can_act_for(appointment.user_id) {
            return Err(GetSingleAppointmentError::Forbidden);
        }

        Ok(appointment)
    }
}
