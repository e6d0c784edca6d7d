use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use super::appointment_query_postgres::map_appointment_model;
use super::sea_orm_entity::appointments::{ActiveModel, Column, Entity, Model};
use crate::modules::appointment::application::domain::entities::{Appointment, Feedback};
use crate::modules::appointment::application::domain::status::AppointmentStatus;
use crate::modules::appointment::application::ports::outgoing::{
    AppointmentChanges, AppointmentRepository, AppointmentRepositoryError, NewAppointment,
    PatchField,
};

#[derive(Clone)]
pub struct AppointmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AppointmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> AppointmentRepositoryError {
    e.sql_err()
        .and_then(constraint_error)
        .unwrap_or_else(|| AppointmentRepositoryError::DatabaseError(e.to_string()))
}

/// The only unique index on the table is the active booking per owner and day.
fn constraint_error(err: SqlErr) -> Option<AppointmentRepositoryError> {
    match err {
        SqlErr::ForeignKeyConstraintViolation(_) => Some(AppointmentRepositoryError::OwnerNotFound),
        SqlErr::UniqueConstraintViolation(_) => {
            Some(AppointmentRepositoryError::ActiveAppointmentExists)
        }
        _ => None,
    }
}

fn to_appointment(model: Model) -> Result<Appointment, AppointmentRepositoryError> {
    map_appointment_model(model).map_err(AppointmentRepositoryError::DatabaseError)
}

fn first_row(rows: Vec<Model>) -> Result<Appointment, AppointmentRepositoryError> {
    rows.into_iter()
        .next()
        .ok_or(AppointmentRepositoryError::NotFound)
        .and_then(to_appointment)
}

fn set_nullable(target: &mut sea_orm::ActiveValue<Option<String>>, value: PatchField<String>) {
    match value {
        PatchField::Unset => {}
        PatchField::Null => *target = Set(None),
        PatchField::Value(v) => *target = Set(Some(v)),
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentRepositoryPostgres {
    async fn create(&self, data: NewAppointment) -> Result<Appointment, AppointmentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id.value()),
            service_name: Set(data.service_name),
            username: Set(data.username),
            email: Set(data.email),
            contact_number: Set(data.contact_number),
            description: Set(data.description),
            medical_history: Set(data.medical_history),
            allergies: Set(data.allergies),
            date: Set(data.date),
            time: Set(data.time),
            status: Set(AppointmentStatus::Pending.as_str().to_string()),
            cancellation_reason: Set(None),
            feedback_rating: Set(None),
            feedback_comment: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        to_appointment(inserted)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: AppointmentChanges,
    ) -> Result<Appointment, AppointmentRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(v) = changes.service_name {
            model.service_name = Set(v);
        }
        if let Some(v) = changes.username {
            model.username = Set(v);
        }
        if let Some(v) = changes.email {
            model.email = Set(v);
        }
        if let Some(v) = changes.contact_number {
            model.contact_number = Set(v);
        }
        if let Some(v) = changes.date {
            model.date = Set(v);
        }
        if let Some(v) = changes.time {
            model.time = Set(v);
        }
        if let Some(status) = changes.status {
            model.status = Set(status.as_str().to_string());
        }
        set_nullable(&mut model.description, changes.description);
        set_nullable(&mut model.medical_history, changes.medical_history);
        set_nullable(&mut model.allergies, changes.allergies);
        set_nullable(&mut model.cancellation_reason, changes.cancellation_reason);
        model.updated_at = Set(Utc::now().fixed_offset());

        let rows = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        first_row(rows)
    }

    async fn set_feedback(
        &self,
        id: Uuid,
        feedback: Feedback,
    ) -> Result<Appointment, AppointmentRepositoryError> {
        let rows = Entity::update_many()
            .col_expr(Column::FeedbackRating, Expr::value(i16::from(feedback.rating)))
            .col_expr(Column::FeedbackComment, Expr::value(feedback.comment))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        first_row(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppointmentRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(AppointmentRepositoryError::NotFound);
        }
        Ok(())
    }
}
