pub use sea_orm_migration::prelude::*;

mod m20220501_000001_create_users;
mod m20220501_000002_create_line_login;
mod m20220501_000003_create_line_notify;
mod m20220501_000004_create_line_notify_records;
mod m20220501_000005_create_aerich;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220501_000001_create_users::Migration),
            Box::new(m20220501_000002_create_line_login::Migration),
            Box::new(m20220501_000003_create_line_notify::Migration),
            Box::new(m20220501_000004_create_line_notify_records::Migration),
            Box::new(m20220501_000005_create_aerich::Migration),
        ]
    }
}

/// `CHECK (LENGTH(col) <= max)`.
///
/// PostgreSQL already rejects oversized `VARCHAR(n)` values, SQLite does not,
/// so bounded columns carry this check on both engines.
pub(crate) fn length_at_most<T: Iden>(column: T, max: u32) -> SimpleExpr {
    Expr::cust(format!("LENGTH(\"{}\") <= {}", column.to_string(), max))
}
