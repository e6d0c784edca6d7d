use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub username: String,

    #[sea_orm(unique, column_type = "String(StringLen::N(255))")]
    pub email: String,

    #[sea_orm(column_type = "String(StringLen::N(32))")]
    pub contact_number: String,

    #[sea_orm(column_type = "Text")]
    pub password_hash: String,

    #[sea_orm(column_type = "String(StringLen::N(16))")]
    pub role: String,

    pub is_verified: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub verification_code_hash: Option<String>,

    #[sea_orm(nullable)]
    pub verification_code_expires_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "Text", nullable)]
    pub reset_code_hash: Option<String>,

    #[sea_orm(nullable)]
    pub reset_code_expires_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::appointment::adapter::outgoing::sea_orm_entity::appointments::Entity"
    )]
    Appointments,

    #[sea_orm(has_many = "crate::modules::chat::adapter::outgoing::sea_orm_entity::messages::Entity")]
    Messages,
}

impl Related<crate::modules::appointment::adapter::outgoing::sea_orm_entity::appointments::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Appointments.def()
    }
}

impl Related<crate::modules::chat::adapter::outgoing::sea_orm_entity::messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
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

        if let ActiveValue::Set(username) = &self.username {
            self.username = Set(username.trim().to_string());
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
