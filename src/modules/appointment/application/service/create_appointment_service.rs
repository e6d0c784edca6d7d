use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::Requester;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::domain::fields::{
    self, MAX_CONTACT_NUMBER, MAX_NOTES, MAX_SERVICE_NAME, MAX_TIME, MAX_USERNAME,
};
use crate::modules::appointment::application::domain::schedule::{
    parse_date, parse_time, SchedulePolicy,
};
use crate::modules::appointment::application::ports::incoming::use_cases::{
    CreateAppointmentError, CreateAppointmentInput, CreateAppointmentUseCase,
};
use crate::modules::appointment::application::ports::outgoing::{
    AppointmentRepository, AppointmentRepositoryError, NewAppointment,
};

pub struct CreateAppointmentService<R, U>
where
    R: AppointmentRepository,
    U: UserQuery,
{
    repository: R,
    users: U,
    policy: SchedulePolicy,
}

impl<R, U> CreateAppointmentService<R, U>
where
    R: AppointmentRepository,
    U: UserQuery,
{
    pub fn new(repository: R, users: U, policy: SchedulePolicy) -> Self {
        Self {
            repository,
            users,
            policy,
        }
    }
}

#[async_trait]
impl<R, U> CreateAppointmentUseCase for CreateAppointmentService<R, U>
where
    R: AppointmentRepository + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        input: CreateAppointmentInput,
    ) -> Result<Appointment, CreateAppointmentError> {
        let owner = input.user_id.unwrap_or(requester.user_id);
        if !requester.can_act_for(owner) {
            warn!(requester = %requester.user_id, owner = %owner, "Patient tried to book for another user");
            return Err(CreateAppointmentError::Forbidden);
        }

        let service_name =
            fields::required("serviceName", &input.service_name, MAX_SERVICE_NAME)?;
        let username = fields::required("username", &input.username, MAX_USERNAME)?;
        let email = fields::email(&input.email)?;
        let contact_number =
            fields::required("contactNumber", &input.contact_number, MAX_CONTACT_NUMBER)?;
        let date = parse_date(&fields::required("date", &input.date, MAX_TIME)?)?;
        let time = fields::required("time", &input.time, MAX_TIME)?;
        let description = fields::optional("description", input.description.as_deref(), MAX_NOTES)?;
        let medical_history =
            fields::optional("medicalHistory", input.medical_history.as_deref(), MAX_NOTES)?;
        let allergies = fields::optional("allergies", input.allergies.as_deref(), MAX_NOTES)?;

        self.policy.validate(date, parse_time(&time)?)?;

        match self.users.find_by_id(owner).await {
            Ok(Some(_)) => {}
            Ok(None) => return Err(CreateAppointmentError::OwnerNotFound),
            Err(e) => return Err(CreateAppointmentError::RepositoryError(e.to_string())),
        }

        let appointment = self
            .repository
            .create(NewAppointment {
                user_id: owner,
                service_name,
                username,
                email,
                contact_number,
                description,
                medical_history,
                allergies,
                date,
                time,
            })
            .await
            .map_err(|e| match e {
                AppointmentRepositoryError::OwnerNotFound => CreateAppointmentError::OwnerNotFound,
                AppointmentRepositoryError::ActiveAppointmentExists => {
                    CreateAppointmentError::Conflict
                }
                other => CreateAppointmentError::RepositoryError(other.to_string()),
            })?;

        info!(
            appointment_id = %appointment.id,
            user_id = %owner,
            date = %appointment.date,
            "Appointment booked"
        );

        Ok(appointment)
    }
}
