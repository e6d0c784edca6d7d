use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub user_id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub service_name: String,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub username: String,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub email: String,

    #[sea_orm(column_type = "String(StringLen::N(32))")]
    pub contact_number: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub medical_history: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub allergies: Option<String>,

    pub date: Date,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub time: String,

    #[sea_orm(column_type = "String(StringLen::N(16))")]
    pub status: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub cancellation_reason: Option<String>,

    #[sea_orm(nullable)]
    pub feedback_rating: Option<i16>,

    #[sea_orm(column_type = "Text", nullable)]
    pub feedback_comment: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(email) = &self.email {
            self.email = Set(email.trim().to_lowercase());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
