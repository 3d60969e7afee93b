//! Append-only log of notifications sent through LINE Notify.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::db::DbConn;
use crate::error::Result;
use crate::models::prelude::*;
use crate::models::{line_notify_record, user};
use crate::schemas::NewNotifyRecord;

pub async fn append(
    db: &DbConn,
    user_id: i32,
    record: NewNotifyRecord,
) -> Result<line_notify_record::Model> {
    append_at(db, user_id, record, Utc::now()).await
}

/// Append with an explicit creation time
pub async fn append_at(
    db: &DbConn,
    user_id: i32,
    record: NewNotifyRecord,
    create_at: DateTime<Utc>,
) -> Result<line_notify_record::Model> {
    let entry = line_notify_record::ActiveModel {
        create_at: Set(create_at),
        message: Set(record.message),
        image_thumb_nil: Set(record.image_thumbnail),
        image_full_size: Set(record.image_full_size),
        user_id: Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(entry)
}

/// Every record with its sender, newest first
pub async fn list_all(
    db: &DbConn,
) -> Result<Vec<(line_notify_record::Model, Option<user::Model>)>> {
    Ok(LineNotifyRecord::find()
        .find_also_related(User)
        .order_by_desc(line_notify_record::Column::CreateAt)
        .order_by_desc(line_notify_record::Column::Id)
        .all(db)
        .await?)
}

/// Records created in `[from, to)`, newest first
pub async fn list_between(
    db: &DbConn,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<line_notify_record::Model>> {
    Ok(LineNotifyRecord::find()
        .filter(line_notify_record::Column::CreateAt.gte(from))
        .filter(line_notify_record::Column::CreateAt.lt(to))
        .order_by_desc(line_notify_record::Column::CreateAt)
        .order_by_desc(line_notify_record::Column::Id)
        .all(db)
        .await?)
}

pub async fn list_for_user(db: &DbConn, user_id: i32) -> Result<Vec<line_notify_record::Model>> {
    Ok(LineNotifyRecord::find()
        .filter(line_notify_record::Column::UserId.eq(user_id))
        .order_by_desc(line_notify_record::Column::CreateAt)
        .order_by_desc(line_notify_record::Column::Id)
        .all(db)
        .await?)
}
