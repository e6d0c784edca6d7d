use sea_orm_migration::prelude::*;

use crate::m20250304_105428_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Messages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Messages::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Messages::UserEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Messages::Username).string_len(50).not_null())
                    .col(ColumnDef::new(Messages::Message).string_len(500).not_null())
                    .col(
                        ColumnDef::new(Messages::Sender)
                            .string_len(16)
                            .not_null()
                            .check(Expr::col(Messages::Sender).is_in(["patient", "admin"])),
                    )
                    .col(
                        ColumnDef::new(Messages::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Messages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_messages_user_id")
                            .from(Messages::Table, Messages::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Conversation thread in order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_messages_user_created
                ON messages (user_id, created_at);
                "#,
            )
            .await?;

        // Unread counters and mark-read
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_messages_user_sender_read
                ON messages (user_id, sender, is_read);
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
                DROP INDEX IF EXISTS idx_messages_user_created;
                DROP INDEX IF EXISTS idx_messages_user_sender_read;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Messages {
    Table,
    Id,
    UserId,
    UserEmail,
    Username,
    Message,
    Sender,
    IsRead,
    CreatedAt,
}
