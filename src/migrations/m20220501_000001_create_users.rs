//! Migration: Create users table

use sea_orm_migration::prelude::*;

use super::length_at_most;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Name)
                            .string_len(50)
                            .not_null()
                            .check(length_at_most(Users::Name, 50)),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(128)
                            .null()
                            .unique_key()
                            .check(length_at_most(Users::Email, 128)),
                    )
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string_len(128)
                            .null()
                            .check(length_at_most(Users::PasswordHash, 128)),
                    )
                    .col(
                        ColumnDef::new(Users::CreateAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::LastLoginAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Users {
    Table,
    Id,
    Name,
    Email,
    #[iden = "password_hash"]
    PasswordHash,
    #[iden = "create_at"]
    CreateAt,
    #[iden = "last_login_at"]
    LastLoginAt,
}
