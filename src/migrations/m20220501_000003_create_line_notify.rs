//! Migration: Create line_notify table

use sea_orm_migration::prelude::*;

use super::length_at_most;
use super::m20220501_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LineNotify::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LineNotify::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LineNotify::CreateAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LineNotify::UpdateAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(LineNotify::AccessToken)
                            .string_len(300)
                            .not_null()
                            .check(length_at_most(LineNotify::AccessToken, 300)),
                    )
                    .col(
                        ColumnDef::new(LineNotify::IsRevoked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_notify_user")
                            .from(LineNotify::Table, LineNotify::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(LineNotify::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "line_notify"]
enum LineNotify {
    Table,
    #[iden = "user_id"]
    UserId,
    #[iden = "create_at"]
    CreateAt,
    #[iden = "update_at"]
    UpdateAt,
    #[iden = "access_token"]
    AccessToken,
    #[iden = "is_revoked"]
    IsRevoked,
}
