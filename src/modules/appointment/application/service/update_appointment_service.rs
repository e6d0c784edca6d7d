use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::Requester;
use crate::modules::appointment::application::domain::entities::Appointment;
use crate::modules::appointment::application::domain::fields::{
    self, FieldError, MAX_CANCELLATION_REASON, MAX_CONTACT_NUMBER, MAX_NOTES, MAX_SERVICE_NAME,
    MAX_TIME, MAX_USERNAME,
};
use crate::modules::appointment::application::domain::schedule::{
    parse_date, parse_time, SchedulePolicy,
};
use crate::modules::appointment::application::domain::status::{
    check_transition, resolve_edit_target, AppointmentStatus,
};
use crate::modules::appointment::application::ports::incoming::use_cases::{
    AppointmentPatch, UpdateAppointmentError, UpdateAppointmentUseCase,
};
use crate::modules::appointment::application::ports::outgoing::{
    AppointmentChanges, AppointmentQuery, AppointmentRepository, AppointmentRepositoryError,
    PatchField,
};

pub struct UpdateAppointmentService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    query: Q,
    repository: R,
    policy: SchedulePolicy,
}

impl<Q, R> UpdateAppointmentService<Q, R>
where
    Q: AppointmentQuery,
    R: AppointmentRepository,
{
    pub fn new(query: Q, repository: R, policy: SchedulePolicy) -> Self {
        Self {
            query,
            repository,
            policy,
        }
    }

    fn build_changes(
        &self,
        current: &Appointment,
        target: AppointmentStatus,
        patch: AppointmentPatch,
    ) -> Result<AppointmentChanges, UpdateAppointmentError> {
        let date = match patch.date {
            PatchField::Unset => None,
            PatchField::Null => return Err(FieldError::Missing("date").into()),
            PatchField::Value(raw) => Some(parse_date(&fields::required("date", &raw, MAX_TIME)?)?),
        };
        let time = required_change("time", patch.time, MAX_TIME)?;

        if date.is_some() || time.is_some() {
            let when = parse_time(time.as_deref().unwrap_or(&current.time))?;
            self.policy.validate(date.unwrap_or(current.date), when)?;
        }

        let email = match patch.email {
            PatchField::Unset => None,
            PatchField::Null => return Err(FieldError::Missing("email").into()),
            PatchField::Value(raw) => Some(fields::email(&raw)?),
        };

        let cancellation_reason = optional_change(
            "cancellationReason",
            patch.cancellation_reason,
            MAX_CANCELLATION_REASON,
        )?;
        if target == AppointmentStatus::Cancelled {
            let has_reason = match &cancellation_reason {
                PatchField::Value(_) => true,
                PatchField::Null => false,
                PatchField::Unset => current.cancellation_reason.is_some(),
            };
            if !has_reason {
                return Err(UpdateAppointmentError::CancellationReasonRequired);
            }
        }

        Ok(AppointmentChanges {
            service_name: required_change("serviceName", patch.service_name, MAX_SERVICE_NAME)?,
            username: required_change("username", patch.username, MAX_USERNAME)?,
            email,
            contact_number: required_change(
                "contactNumber",
                patch.contact_number,
                MAX_CONTACT_NUMBER,
            )?,
            description: optional_change("description", patch.description, MAX_NOTES)?,
            medical_history: optional_change("medicalHistory", patch.medical_history, MAX_NOTES)?,
            allergies: optional_change("allergies", patch.allergies, MAX_NOTES)?,
            date,
            time,
            status: (target != current.status).then_some(target),
            cancellation_reason,
        })
    }
}

fn required_change(
    field: &'static str,
    value: PatchField<String>,
    max: usize,
) -> Result<Option<String>, FieldError> {
    match value {
        PatchField::Unset => Ok(None),
        PatchField::Null => Err(FieldError::Missing(field)),
        PatchField::Value(v) => fields::required(field, &v, max).map(Some),
    }
}

fn optional_change(
    field: &'static str,
    value: PatchField<String>,
    max: usize,
) -> Result<PatchField<String>, FieldError> {
    match value {
        PatchField::Unset => Ok(PatchField::Unset),
        PatchField::Null => Ok(PatchField::Null),
        PatchField::Value(v) => Ok(match fields::optional(field, Some(&v), max)? {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }),
    }
}

#[async_trait]
impl<Q, R> UpdateAppointmentUseCase for UpdateAppointmentService<Q, R>
where
    Q: AppointmentQuery + Send + Sync,
    R: AppointmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Requester,
        appointment_id: Uuid,
        patch: AppointmentPatch,
    ) -> Result<Appointment, UpdateAppointmentError> {
        let current = self
            .query
            .find_by_id(appointment_id)
            .await
            .map_err(|e| UpdateAppointmentError::RepositoryError(e.to_string()))?
            .ok_or(UpdateAppointmentError::NotFound)?;

        if !requester.can_act_for(current.user_id) {
            return Err(UpdateAppointmentError::Forbidden);
        }

        let target = resolve_edit_target(current.status, patch.status);
        check_transition(current.status, target, requester.role)?;

        let changes = self.build_changes(&current, target, patch)?;

        let updated = self
            .repository
            .update(appointment_id, changes)
            .await
            .map_err(|e| match e {
                AppointmentRepositoryError::NotFound => UpdateAppointmentError::NotFound,
                AppointmentRepositoryError::ActiveAppointmentExists => {
                    UpdateAppointmentError::Conflict
                }
                other => UpdateAppointmentError::RepositoryError(other.to_string()),
            })?;

        if updated.status != current.status {
            info!(
                appointment_id = %appointment_id,
                from = %current.status,
                to = %updated.status,
                by = %requester.user_id,
                "Appointment status changed"
            );
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::modules::appointment::application::domain::schedule::ScheduleError;
    use crate::modules::appointment::application::domain::status::TransitionError;
    use crate::tests::support::appointment_fixtures::{
        admin, patient, sample_appointment, test_schedule_policy, MockAppointmentQueryMock,
        MockAppointmentRepositoryMock,
    };
    use std::sync::{Arc, Mutex};

    fn query_returning(appointment: Appointment) -> MockAppointmentQueryMock {
        let mut query = MockAppointmentQueryMock::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(appointment.clone())));
        query
    }

    /// Repository double that applies the changes to `base` and records them.
    fn applying_repo(
        base: Appointment,
        seen: Arc<Mutex<Option<AppointmentChanges>>>,
    ) -> MockAppointmentRepositoryMock {
        let mut repo = MockAppointmentRepositoryMock::new();
        repo.expect_update().returning(move |_, changes| {
            let mut updated = base.clone();
            if let Some(status) = changes.status {
                updated.status = status;
            }
            if let Some(date) = changes.date {
                updated.date = date;
            }
            if let Some(time) = changes.time.clone() {
                updated.time = time;
            }
            if let PatchField::Value(reason) = changes.cancellation_reason.clone() {
                updated.cancellation_reason = Some(reason);
            }
            *seen.lock().unwrap() = Some(changes);
            Ok(updated)
        });
        repo
    }

    fn service(
        current: Appointment,
    ) -> (
        UpdateAppointmentService<MockAppointmentQueryMock, MockAppointmentRepositoryMock>,
        Arc<Mutex<Option<AppointmentChanges>>>,
    ) {
        let seen = Arc::new(Mutex::new(None));
        let svc = UpdateAppointmentService::new(
            query_returning(current.clone()),
            applying_repo(current, Arc::clone(&seen)),
            test_schedule_policy(),
        );
        (svc, seen)
    }

    #[tokio::test]
    async fn editing_cancelled_appointment_reschedules_it() {
        let owner = UserId::from(Uuid::new_v4());
        let mut current = sample_appointment(owner, AppointmentStatus::Cancelled);
        current.cancellation_reason = Some("Schedule Conflict".to_string());
        let id = current.id;
        let (svc, seen) = service(current);

        let patch = AppointmentPatch {
            date: PatchField::Value("2099-01-06".to_string()),
            status: Some(AppointmentStatus::Pending),
            ..Default::default()
        };
        let updated = svc.execute(patient(owner), id, patch).await.unwrap();

        assert_eq!(updated.status, AppointmentStatus::Rescheduled);
        let changes = seen.lock().unwrap().clone().unwrap();
        assert_eq!(changes.status, Some(AppointmentStatus::Rescheduled));
    }

    #[tokio::test]
    async fn cancel_then_edit_scenario() {
        let owner = UserId::from(Uuid::new_v4());
        let pending = sample_appointment(owner, AppointmentStatus::Pending);
        let id = pending.id;

        let (svc, _) = service(pending);
        let cancelled = svc
            .execute(
                patient(owner),
                id,
                AppointmentPatch {
                    status: Some(AppointmentStatus::Cancelled),
                    cancellation_reason: PatchField::Value("Schedule Conflict".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

        let (svc, _) = service(cancelled);
        let edited = svc
            .execute(
                patient(owner),
                id,
                AppointmentPatch {
                    date: PatchField::Value("2099-01-07".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(edited.status, AppointmentStatus::Rescheduled);
    }

    #[tokio::test]
    async fn cancelling_requires_reason() {
        let owner = UserId::from(Uuid::new_v4());
        let current = sample_appointment(owner, AppointmentStatus::Pending);
        let id = current.id;
        let (svc, _) = service(current);

        let result = svc
            .execute(
                patient(owner),
                id,
                AppointmentPatch {
                    status: Some(AppointmentStatus::Cancelled),
                    cancellation_reason: PatchField::Value("   ".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result, Err(UpdateAppointmentError::CancellationReasonRequired));
    }

    #[tokio::test]
    async fn completed_appointment_is_frozen() {
        let owner = UserId::from(Uuid::new_v4());
        let current = sample_appointment(owner, AppointmentStatus::Completed);
        let id = current.id;
        let (svc, _) = service(current);

        let result = svc
            .execute(
                admin(),
                id,
                AppointmentPatch {
                    description: PatchField::Value("late note".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(
            result,
            Err(UpdateAppointmentError::Transition(TransitionError::Completed))
        );
    }

    #[tokio::test]
    async fn patient_cannot_accept() {
        let owner = UserId::from(Uuid::new_v4());
        let current = sample_appointment(owner, AppointmentStatus::Pending);
        let id = current.id;
        let (svc, _) = service(current);

        let result = svc
            .execute(
                patient(owner),
                id,
                AppointmentPatch {
                    status: Some(AppointmentStatus::Accepted),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(
            result,
            Err(UpdateAppointmentError::Transition(
                TransitionError::AdminRequired(AppointmentStatus::Accepted)
            ))
        );
    }

    #[tokio::test]
    async fn admin_accepts_pending() {
        let current = sample_appointment(UserId::from(Uuid::new_v4()), AppointmentStatus::Pending);
        let id = current.id;
        let (svc, _) = service(current);

        let updated = svc
            .execute(
                admin(),
                id,
                AppointmentPatch {
                    status: Some(AppointmentStatus::Accepted),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, AppointmentStatus::Accepted);
    }

    #[tokio::test]
    async fn new_time_is_checked_against_clinic_hours() {
        let owner = UserId::from(Uuid::new_v4());
        let current = sample_appointment(owner, AppointmentStatus::Pending);
        let id = current.id;
        let (svc, _) = service(current);

        let result = svc
            .execute(
                patient(owner),
                id,
                AppointmentPatch {
                    time: PatchField::Value("7:00 AM".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(UpdateAppointmentError::InvalidSchedule(
                ScheduleError::OutsideClinicHours { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn required_field_cannot_be_nulled() {
        let owner = UserId::from(Uuid::new_v4());
        let current = sample_appointment(owner, AppointmentStatus::Pending);
        let id = current.id;
        let (svc, _) = service(current);

        let result = svc
            .execute(
                patient(owner),
                id,
                AppointmentPatch {
                    contact_number: PatchField::Null,
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(
            result,
            Err(UpdateAppointmentError::InvalidField(FieldError::Missing(
                "contactNumber"
            )))
        );
    }

    #[tokio::test]
    async fn blank_description_clears_it() {
        let owner = UserId::from(Uuid::new_v4());
        let current = sample_appointment(owner, AppointmentStatus::Pending);
        let id = current.id;
        let (svc, seen) = service(current);

        svc.execute(
            patient(owner),
            id,
            AppointmentPatch {
                description: PatchField::Value(" ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let changes = seen.lock().unwrap().clone().unwrap();
        assert_eq!(changes.description, PatchField::Null);
        assert_eq!(changes.status, None);
    }

    #[tokio::test]
    async fn other_patient_is_forbidden() {
        let current = sample_appointment(UserId::from(Uuid::new_v4()), AppointmentStatus::Pending);
        let id = current.id;
        let (svc, _) = service(current);

        let result = svc
            .execute(patient(UserId::from(Uuid::new_v4())), id, AppointmentPatch::default())
            .await;
        assert_eq!(result, Err(UpdateAppointmentError::Forbidden));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut query = MockAppointmentQueryMock::new();
        query.expect_find_by_id().returning(|_| Ok(None));
        let svc = UpdateAppointmentService::new(
            query,
            MockAppointmentRepositoryMock::new(),
            test_schedule_policy(),
        );

        let result = svc
            .execute(admin(), Uuid::new_v4(), AppointmentPatch::default())
            .await;
        assert_eq!(result, Err(UpdateAppointmentError::NotFound));
    }

    #[tokio::test]
    async fn rescheduling_into_occupied_day_conflicts() {
        let owner = UserId::from(Uuid::new_v4());
        let mut current = sample_appointment(owner, AppointmentStatus::Cancelled);
        current.cancellation_reason = Some("sick".to_string());
        let id = current.id;

        let mut repo = MockAppointmentRepositoryMock::new();
        repo.expect_update()
            .returning(|_, _| Err(AppointmentRepositoryError::ActiveAppointmentExists));
        let svc = UpdateAppointmentService::new(query_returning(current), repo, test_schedule_policy());

        let result = svc
            .execute(patient(owner), id, AppointmentPatch::default())
            .await;
        assert_eq!(result, Err(UpdateAppointmentError::Conflict));
    }
}
