//! Migration: Create line_notify_records table

use sea_orm_migration::prelude::*;

use super::m20220501_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LineNotifyRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LineNotifyRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LineNotifyRecords::CreateAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LineNotifyRecords::Message).text().not_null())
                    .col(ColumnDef::new(LineNotifyRecords::ImageThumbNil).text().null())
                    .col(ColumnDef::new(LineNotifyRecords::ImageFullSize).text().null())
                    .col(
                        ColumnDef::new(LineNotifyRecords::UserId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_notify_records_user")
                            .from(LineNotifyRecords::Table, LineNotifyRecords::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_line_notify_records_create_at")
                    .table(LineNotifyRecords::Table)
                    .col(LineNotifyRecords::CreateAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(LineNotifyRecords::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "line_notify_records"]
enum LineNotifyRecords {
    Table,
    Id,
    #[iden = "create_at"]
    CreateAt,
    Message,
    #[iden = "image_thumb_nil"]
    ImageThumbNil,
    #[iden = "image_full_size"]
    ImageFullSize,
    #[iden = "user_id"]
    UserId,
}
