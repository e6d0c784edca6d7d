use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use mockall::mock;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Requester, Role, UserId};
use crate::modules::appointment::application::domain::entities::{Appointment, Feedback};
use crate::modules::appointment::application::domain::schedule::{ClinicHours, SchedulePolicy};
use crate::modules::appointment::application::domain::status::AppointmentStatus;
use crate::modules::appointment::application::ports::outgoing::{
    AppointmentChanges, AppointmentFilter, AppointmentQuery, AppointmentQueryError,
    AppointmentRepository, AppointmentRepositoryError, NewAppointment,
};

mock! {
    pub AppointmentQueryMock {}

    #[async_trait]
    impl AppointmentQuery for AppointmentQueryMock {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, AppointmentQueryError>;
        async fn list(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>, AppointmentQueryError>;
    }
}

mock! {
    pub AppointmentRepositoryMock {}

    #[async_trait]
    impl AppointmentRepository for AppointmentRepositoryMock {
        async fn create(&self, data: NewAppointment) -> Result<Appointment, AppointmentRepositoryError>;
        async fn update(&self, id: Uuid, changes: AppointmentChanges) -> Result<Appointment, AppointmentRepositoryError>;
        async fn set_feedback(&self, id: Uuid, feedback: Feedback) -> Result<Appointment, AppointmentRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), AppointmentRepositoryError>;
    }
}

/// A Monday far enough ahead that schedule checks never see it as past.
pub fn future_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 5).unwrap()
}

pub fn test_schedule_policy() -> SchedulePolicy {
    SchedulePolicy::new(
        ClinicHours::default(),
        chrono::FixedOffset::east_opt(8 * 3600).unwrap(),
    )
}

pub fn patient(user_id: UserId) -> Requester {
    Requester::new(user_id, Role::Patient)
}

pub fn admin() -> Requester {
    Requester::new(UserId::from(Uuid::new_v4()), Role::Admin)
}

pub fn sample_appointment(owner: UserId, status: AppointmentStatus) -> Appointment {
    let now = Utc::now();
    Appointment {
        id: Uuid::new_v4(),
        user_id: owner,
        service_name: "Teeth Cleaning".to_string(),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        contact_number: "09171234567".to_string(),
        description: Some("Routine cleaning".to_string()),
        medical_history: None,
        allergies: None,
        date: future_monday(),
        time: "10:00 AM".to_string(),
        status,
        cancellation_reason: None,
        feedback: None,
        created_at: now,
        updated_at: now,
    }
}

/* --------------------------------------------------
 * Shared in-memory appointment table
 * -------------------------------------------------- */

/// Backs both appointment ports with one list. Clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryAppointments {
    rows: Arc<Mutex<Vec<Appointment>>>,
}

impl InMemoryAppointments {
    fn rows(&self) -> MutexGuard<'_, Vec<Appointment>> {
        self.rows.lock().unwrap()
    }
}

#[async_trait]
impl AppointmentQuery for InMemoryAppointments {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, AppointmentQueryError> {
        Ok(self.rows().iter().find(|a| a.id == id).cloned())
    }

    async fn list(
        &self,
        filter: AppointmentFilter,
    ) -> Result<Vec<Appointment>, AppointmentQueryError> {
        let mut found: Vec<Appointment> = self
            .rows()
            .iter()
            .filter(|a| filter.owner.map_or(true, |owner| a.user_id == owner))
            .filter(|a| filter.statuses.is_empty() || filter.statuses.contains(&a.status))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointments {
    /// Mirrors the partial unique index on (user_id, date).
    async fn create(&self, data: NewAppointment) -> Result<Appointment, AppointmentRepositoryError> {
        let mut rows = self.rows();
        let occupied = rows.iter().any(|a| {
            a.user_id == data.user_id
                && a.date == data.date
                && matches!(
                    a.status,
                    AppointmentStatus::Pending
                        | AppointmentStatus::Accepted
                        | AppointmentStatus::Rescheduled
                )
        });
        if occupied {
            return Err(AppointmentRepositoryError::ActiveAppointmentExists);
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            service_name: data.service_name,
            username: data.username,
            email: data.email,
            contact_number: data.contact_number,
            description: data.description,
            medical_history: data.medical_history,
            allergies: data.allergies,
            date: data.date,
            time: data.time,
            status: AppointmentStatus::Pending,
            cancellation_reason: None,
            feedback: None,
            created_at: now,
            updated_at: now,
        };
        rows.push(appointment.clone());
        Ok(appointment)
    }

    async fn update(
        &self,
        _id: Uuid,
        _changes: AppointmentChanges,
    ) -> Result<Appointment, AppointmentRepositoryError> {
        unimplemented!("updates are covered against MockDatabase")
    }

    async fn set_feedback(
        &self,
        _id: Uuid,
        _feedback: Feedback,
    ) -> Result<Appointment, AppointmentRepositoryError> {
        unimplemented!("feedback is covered against MockDatabase")
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppointmentRepositoryError> {
        let mut rows = self.rows();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(AppointmentRepositoryError::NotFound);
        }
        Ok(())
    }
}
