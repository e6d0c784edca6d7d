use sea_orm_migration::prelude::*;

use crate::m20250304_105428_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create appointments table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Appointments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appointments::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Appointments::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Appointments::ServiceName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::Username)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Appointments::ContactNumber)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appointments::Description).text())
                    .col(ColumnDef::new(Appointments::MedicalHistory).text())
                    .col(ColumnDef::new(Appointments::Allergies).text())
                    .col(ColumnDef::new(Appointments::Date).date().not_null())
                    .col(ColumnDef::new(Appointments::Time).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Appointments::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(Appointments::Status).is_in([
                                "pending",
                                "accepted",
                                "completed",
                                "cancelled",
                                "rescheduled",
                            ])),
                    )
                    .col(ColumnDef::new(Appointments::CancellationReason).text())
                    .col(
                        ColumnDef::new(Appointments::FeedbackRating)
                            .small_integer()
                            .check(Expr::col(Appointments::FeedbackRating).between(1, 5)),
                    )
                    .col(ColumnDef::new(Appointments::FeedbackComment).text())
                    .col(
                        ColumnDef::new(Appointments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Appointments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointments_user_id")
                            .from(Appointments::Table, Appointments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Owner history, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_appointments_user_created
                ON appointments (user_id, created_at DESC);
                "#,
            )
            .await?;

        // Admin list, newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_appointments_created_at
                ON appointments (created_at DESC);
                "#,
            )
            .await?;

        // One active booking per owner per day
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_appointments_active_owner_date
                ON appointments (user_id, date)
                WHERE status IN ('pending', 'accepted', 'rescheduled');
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_appointments_updated_at
                BEFORE UPDATE ON appointments
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_appointments_updated_at ON appointments;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_appointments_user_created;
                DROP INDEX IF EXISTS idx_appointments_created_at;
                DROP INDEX IF EXISTS idx_appointments_active_owner_date;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Appointments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Appointments {
    Table,
    Id,
    UserId,
    ServiceName,
    Username,
    Email,
    ContactNumber,
    Description,
    MedicalHistory,
    Allergies,
    Date,
    Time,
    Status,
    CancellationReason,
    FeedbackRating,
    FeedbackComment,
    CreatedAt,
    UpdatedAt,
}
