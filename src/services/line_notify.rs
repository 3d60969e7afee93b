//! LINE Notify integration tokens, one row per user.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::db::DbConn;
use crate::error::{AppError, Result};
use crate::models::line_notify;
use crate::models::prelude::*;

/// Store a LINE Notify token for a user.
///
/// A fresh row leaves `is_revoked` to the column default. Replacing an
/// existing token re-activates the integration.
pub async fn upsert(db: &DbConn, user_id: i32, access_token: String) -> Result<line_notify::Model> {
    let now = Utc::now();

    let model = match LineNotify::find_by_id(user_id).one(db).await? {
        Some(current) => {
            let mut active = current.into_active_model();
            active.access_token = Set(access_token);
            active.is_revoked = Set(false);
            active.update_at = Set(Some(now));
            active.update(db).await?
        }
        None => {
            line_notify::ActiveModel {
                user_id: Set(user_id),
                create_at: Set(now),
                update_at: Set(None),
                access_token: Set(access_token),
                is_revoked: NotSet,
            }
            .insert(db)
            .await?
        }
    };

    tracing::debug!(user_id, "LINE Notify token stored");
    Ok(model)
}

pub async fn find_by_user(db: &DbConn, user_id: i32) -> Result<Option<line_notify::Model>> {
    Ok(LineNotify::find_by_id(user_id).one(db).await?)
}

/// Mark the user's token as revoked
pub async fn revoke(db: &DbConn, user_id: i32) -> Result<line_notify::Model> {
    let current = find_by_user(db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("LINE Notify for user {} not found", user_id)))?;

    if current.is_revoked {
        return Ok(current);
    }

    let mut active = current.into_active_model();
    active.is_revoked = Set(true);
    active.update_at = Set(Some(Utc::now()));
    let model = active.update(db).await?;

    tracing::info!(user_id, "LINE Notify token revoked");
    Ok(model)
}

/// Integrations that can still receive notifications
pub async fn active_tokens(db: &DbConn) -> Result<Vec<line_notify::Model>> {
    Ok(LineNotify::find()
        .filter(line_notify::Column::IsRevoked.eq(false))
        .order_by_asc(line_notify::Column::UserId)
        .all(db)
        .await?)
}
