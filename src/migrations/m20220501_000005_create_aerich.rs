//! Migration: Create aerich table (migration ledger)

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
                    .table(Aerich::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Aerich::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Aerich::Version)
                            .string_len(255)
                            .not_null()
                            .check(length_at_most(Aerich::Version, 255)),
                    )
                    .col(
                        ColumnDef::new(Aerich::App)
                            .string_len(100)
                            .not_null()
                            .check(length_at_most(Aerich::App, 100)),
                    )
                    .col(ColumnDef::new(Aerich::Content).json_binary().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aerich::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
enum Aerich {
    Table,
    Id,
    Version,
    App,
    Content,
}
