//! Migration ledger kept in the `aerich` table.
//!
//! The migrator tracks its own progress; this ledger mirrors every applied
//! migration together with a snapshot of the table layout it left behind.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityName, EntityTrait, IdenStatic, Iterable, QueryFilter,
    QueryOrder, Set,
};
use sea_orm_migration::{MigrationName, MigratorTrait};
use serde::Serialize;
use serde_json::Value;

use crate::db::DbConn;
use crate::error::{AppError, Result};
use crate::migrations::Migrator;
use crate::models::prelude::*;
use crate::models::{aerich, line_login, line_notify, line_notify_record, user};

#[derive(Debug, Serialize)]
struct ColumnSnapshot {
    name: String,
    #[serde(rename = "type")]
    column_type: String,
}

#[derive(Debug, Serialize)]
struct TableSnapshot {
    table: String,
    columns: Vec<ColumnSnapshot>,
}

fn snapshot_of<E>(entity: E) -> TableSnapshot
where
    E: EntityTrait,
{
    let columns = E::Column::iter()
        .map(|col| ColumnSnapshot {
            name: col.as_str().to_string(),
            column_type: format!("{:?}", col.def().get_column_type()),
        })
        .collect();

    TableSnapshot {
        table: entity.table_name().to_string(),
        columns,
    }
}

/// Every table in creation order. Each migration creates exactly one of them.
fn table_snapshots() -> Vec<TableSnapshot> {
    vec![
        snapshot_of(user::Entity),
        snapshot_of(line_login::Entity),
        snapshot_of(line_notify::Entity),
        snapshot_of(line_notify_record::Entity),
        snapshot_of(aerich::Entity),
    ]
}

/// JSON description of the tables that exist once `migration` is applied,
/// stored as ledger content
pub fn schema_snapshot(migration: &str) -> Result<Value> {
    let position = Migrator::migrations()
        .iter()
        .position(|m| m.name() == migration)
        .ok_or_else(|| AppError::NotFound(format!("Unknown migration {}", migration)))?;

    let tables: Vec<TableSnapshot> = table_snapshots().into_iter().take(position + 1).collect();

    Ok(serde_json::json!({
        "migration": migration,
        "tables": serde_json::to_value(tables)?,
    }))
}

/// Write a ledger row for every applied migration not yet recorded for `app`.
/// Returns the number of rows written.
pub async fn record_applied(db: &DbConn, app: &str) -> Result<usize> {
    let applied = Migrator::get_applied_migrations(db).await?;

    let recorded: Vec<String> = Aerich::find()
        .filter(aerich::Column::App.eq(app))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.version)
        .collect();

    let mut written = 0;
    for migration in applied {
        let version = migration.name().to_string();
        if recorded.contains(&version) {
            continue;
        }

        aerich::ActiveModel {
            version: Set(version.clone()),
            app: Set(app.to_string()),
            content: Set(schema_snapshot(&version)?),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::info!(%version, app, "Recorded migration in ledger");
        written += 1;
    }

    Ok(written)
}

/// Most recently recorded migration for `app`
pub async fn latest(db: &DbConn, app: &str) -> Result<Option<aerich::Model>> {
    Ok(Aerich::find()
        .filter(aerich::Column::App.eq(app))
        .order_by_desc(aerich::Column::Id)
        .one(db)
        .await?)
}

pub async fn history(db: &DbConn, app: &str) -> Result<Vec<aerich::Model>> {
    Ok(Aerich::find()
        .filter(aerich::Column::App.eq(app))
        .order_by_asc(aerich::Column::Id)
        .all(db)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(snapshot: &Value) -> Vec<&str> {
        snapshot["tables"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["table"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_one_table_per_migration() {
        assert_eq!(table_snapshots().len(), Migrator::migrations().len());
    }

    #[test]
    fn test_first_snapshot_only_has_users() {
        let snapshot = schema_snapshot("m20220501_000001_create_users").unwrap();

        assert_eq!(table_names(&snapshot), vec!["users"]);
        assert_eq!(snapshot["migration"], "m20220501_000001_create_users");
    }

    #[test]
    fn test_snapshot_grows_with_migrations() {
        let snapshot = schema_snapshot("m20220501_000003_create_line_notify").unwrap();
        assert_eq!(
            table_names(&snapshot),
            vec!["users", "line_login", "line_notify"]
        );

        let last = schema_snapshot("m20220501_000005_create_aerich").unwrap();
        assert_eq!(
            table_names(&last),
            vec!["users", "line_login", "line_notify", "line_notify_records", "aerich"]
        );
    }

    #[test]
    fn test_snapshot_uses_column_names() {
        let snapshot = schema_snapshot("m20220501_000004_create_line_notify_records").unwrap();
        let records = &snapshot["tables"][3]["columns"];
        let names: Vec<&str> = records
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();

        assert!(names.contains(&"image_thumb_nil"));
        assert!(names.contains(&"create_at"));
    }

    #[test]
    fn test_unknown_migration_is_rejected() {
        let err = schema_snapshot("m19990101_000001_nothing").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
