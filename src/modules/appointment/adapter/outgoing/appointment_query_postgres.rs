use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QueryTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::appointments::{Column, Entity, Model};
use crate::auth::application::domain::entities::UserId;
use crate::modules::appointment::application::domain::entities::{Appointment, Feedback};
use crate::modules::appointment::application::domain::status::AppointmentStatus;
use crate::modules::appointment::application::ports::outgoing::{
    AppointmentFilter, AppointmentQuery, AppointmentQueryError,
};

#[derive(Clone)]
pub struct AppointmentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AppointmentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(super) fn map_appointment_model(model: Model) -> Result<Appointment, String> {
    let status = model
        .status
        .parse::<AppointmentStatus>()
        .map_err(|e| e.to_string())?;

    let feedback = match model.feedback_rating {
        Some(rating) => Some(Feedback {
            rating: u8::try_from(rating)
                .map_err(|_| format!("feedback rating {} out of range", rating))?,
            comment: model.feedback_comment,
        }),
        None => None,
    };

    Ok(Appointment {
        id: model.id,
        user_id: UserId::from(model.user_id),
        service_name: model.service_name,
        username: model.username,
        email: model.email,
        contact_number: model.contact_number,
        description: model.description,
        medical_history: model.medical_history,
        allergies: model.allergies,
        date: model.date,
        time: model.time,
        status,
        cancellation_reason: model.cancellation_reason,
        feedback,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_domain(model: Model) -> Result<Appointment, AppointmentQueryError> {
    map_appointment_model(model).map_err(AppointmentQueryError::InvalidRecord)
}

#[async_trait]
impl AppointmentQuery for AppointmentQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, AppointmentQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| AppointmentQueryError::DatabaseError(e.to_string()))?
            .map(to_domain)
            .transpose()
    }

    async fn list(
        &self,
        filter: AppointmentFilter,
    ) -> Result<Vec<Appointment>, AppointmentQueryError> {
        let statuses: Vec<&'static str> = filter.statuses.iter().map(|s| s.as_str()).collect();

        let models = Entity::find()
            .apply_if(filter.owner, |q, owner| {
                q.filter(Column::UserId.eq(owner.value()))
            })
            .apply_if((!statuses.is_empty()).then_some(statuses), |q, statuses| {
                q.filter(Column::Status.is_in(statuses))
            })
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| AppointmentQueryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(to_domain).collect()
    }
}
