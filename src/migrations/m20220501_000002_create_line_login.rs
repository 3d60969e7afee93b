//! Migration: Create line_login table
//!
//! One LINE Login session per user. The primary key doubles as the foreign
//! key to `users`, so a second session for the same user cannot exist.

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
                    .table(LineLogin::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LineLogin::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LineLogin::UpdateAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(LineLogin::AccessToken)
                            .string_len(300)
                            .not_null()
                            .check(length_at_most(LineLogin::AccessToken, 300)),
                    )
                    .col(
                        ColumnDef::new(LineLogin::RefreshToken)
                            .string_len(300)
                            .not_null()
                            .check(length_at_most(LineLogin::RefreshToken, 300)),
                    )
                    .col(
                        ColumnDef::new(LineLogin::ExpiresIn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LineLogin::Sub)
                            .string_len(200)
                            .not_null()
                            .check(length_at_most(LineLogin::Sub, 200)),
                    )
                    .col(
                        ColumnDef::new(LineLogin::Name)
                            .string_len(50)
                            .not_null()
                            .check(length_at_most(LineLogin::Name, 50)),
                    )
                    .col(
                        ColumnDef::new(LineLogin::Picture)
                            .string_len(200)
                            .not_null()
                            .check(length_at_most(LineLogin::Picture, 200)),
                    )
                    .col(
                        ColumnDef::new(LineLogin::Email)
                            .string_len(128)
                            .null()
                            .check(length_at_most(LineLogin::Email, 128)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_line_login_user")
                            .from(LineLogin::Table, LineLogin::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_line_login_sub")
                    .table(LineLogin::Table)
                    .col(LineLogin::Sub)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LineLogin::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "line_login"]
enum LineLogin {
    Table,
    #[iden = "user_id"]
    UserId,
    #[iden = "update_at"]
    UpdateAt,
    #[iden = "access_token"]
    AccessToken,
    #[iden = "refresh_token"]
    RefreshToken,
    #[iden = "expires_in"]
    ExpiresIn,
    Sub,
    Name,
    Picture,
    Email,
}
