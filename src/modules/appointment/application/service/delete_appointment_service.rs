use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Requester;
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::ports::incoming::use_cases::{
    DeleteAppointmentError, DeleteAppointmentUseCase,
};
use crate::modules::appointment::application::ports::outgoing::{
    AppointmentQuery, AppointmentRepository, AppointmentRepositoryError,
};

pub struct DeleteAppointmentService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteAppointmentService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteAppointmentUseCase for DeleteAppointmentService<Q, R>
where
    Q: AppointmentQuery + Send + Sync,
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        appointment_id: Uuid,
    ) -> Result<Appointment, DeleteAppointmentError> {
        let appointment = self
            .query
            .find_by_id(appointment_id)
            .await
            .map_err(|e| DeleteAppointmentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteAppointmentError::NotFound)?;

        if !requester.can_act_for(appointment.user_id) {
            return Err(DeleteAppointmentError::Forbidden);
        }

        self.repository
            .delete(appointment_id)
            .await
            .map_err(|e| match e {
                AppointmentRepositoryError::NotFound => DeleteAppointmentError::NotFound,
                other => DeleteAppointmentError::RepositoryError(other.to_string()),
            })?;

        info!(appointment_id = %appointment_id, by = %requester.user_id, "Appointment deleted");
        Ok(appointment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::appointment::application::domain::status::AppointmentStatus;
    use crate::tests::support::appointment_fixtures::{
        admin, patient, sample_appointment, MockAppointmentQueryMock,
        MockAppointmentRepositoryMock,
    };

    fn query_returning(appointment: Option<Appointment>) -> MockAppointmentQueryMock {
        let mut query = MockAppointmentQueryMock::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(appointment.clone()));
        query
    }

    #[tokio::test]
    async fn owner_deletes_and_gets_record_back() {
        let owner = UserId::from(Uuid::new_v4());
        let appointment = sample_appointment(owner, AppointmentStatus::Pending);
        let id = appointment.id;

        let mut repo = MockAppointmentRepositoryMock::new();
        repo.expect_delete()
            .withf(move |target| *target == id)
            .times(1)
            .returning(|_| Ok(()));

        let deleted = DeleteAppointmentService::new(query_returning(Some(appointment)), repo)
            .execute(patient(owner), id)
            .await
            .unwrap();
        assert_eq!(deleted.id, id);
    }

    #[tokio::test]
    async fn other_patient_cannot_delete() {
        let appointment = sample_appointment(UserId::from(Uuid::new_v4()), AppointmentStatus::Pending);
        let id = appointment.id;

        let result = DeleteAppointmentService::new(
            query_returning(Some(appointment)),
            MockAppointmentRepositoryMock::new(),
        )
        .execute(patient(UserId::from(Uuid::new_v4())), id)
        .await;
        assert_eq!(result, Err(DeleteAppointmentError::Forbidden));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let result = DeleteAppointmentService::new(
            query_returning(None),
            MockAppointmentRepositoryMock::new(),
        )
        .execute(admin(), Uuid::new_v4())
        .await;
        assert_eq!(result, Err(DeleteAppointmentError::NotFound));
    }

    #[tokio::test]
    async fn concurrent_delete_maps_to_not_found() {
        let appointment = sample_appointment(UserId::from(Uuid::new_v4()), AppointmentStatus::Pending);
        let id = appointment.id;
        let mut repo = MockAppointmentRepositoryMock::new();
        repo.expect_delete()
            .returning(|_| Err(AppointmentRepositoryError::NotFound));

        let result = DeleteAppointmentService::new(query_returning(Some(appointment)), repo)
            .execute(admin(), id)
            .await;
        assert_eq!(result, Err(DeleteAppointmentError::NotFound));
    }
}
