//! LINE Login session storage, one row per user.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set};

use crate::db::DbConn;
use crate::error::Result;
use crate::models::prelude::*;
use crate::models::{line_login, user};
use crate::schemas::LineLoginTokens;

/// Store the LINE Login session for a user, replacing any existing one
pub async fn upsert(
    db: &DbConn,
    user_id: i32,
    tokens: LineLoginTokens,
) -> Result<line_login::Model> {
    let existing = LineLogin::find_by_id(user_id).one(db).await?;

    let model = match existing {
        Some(current) => {
            let mut active = current.into_active_model();
            active.access_token = Set(tokens.access_token);
            active.refresh_token = Set(tokens.refresh_token);
            active.expires_in = Set(tokens.expires_in);
            active.sub = Set(tokens.sub);
            active.name = Set(tokens.name);
            active.picture = Set(tokens.picture);
            active.email = Set(tokens.email);
            active.update_at = Set(Some(Utc::now()));
            active.update(db).await?
        }
        None => {
            line_login::ActiveModel {
                user_id: Set(user_id),
                update_at: Set(None),
                access_token: Set(tokens.access_token),
                refresh_token: Set(tokens.refresh_token),
                expires_in: Set(tokens.expires_in),
                sub: Set(tokens.sub),
                name: Set(tokens.name),
                picture: Set(tokens.picture),
                email: Set(tokens.email),
            }
            .insert(db)
            .await?
        }
    };

    tracing::debug!(user_id, sub = %model.sub, "LINE Login session stored");
    Ok(model)
}

pub async fn find_by_user(db: &DbConn, user_id: i32) -> Result<Option<line_login::Model>> {
    Ok(LineLogin::find_by_id(user_id).one(db).await?)
}

/// Look up a session by the provider's stable subject id, together with its
/// owning user
pub async fn find_by_sub(
    db: &DbConn,
    sub: &str,
) -> Result<Option<(line_login::Model, user::Model)>> {
    let row = LineLogin::find()
        .filter(line_login::Column::Sub.eq(sub))
        .find_also_related(User)
        .one(db)
        .await?;

    // The foreign key guarantees the owner exists.
    Ok(row.and_then(|(login, owner)| owner.map(|owner| (login, owner))))
}

pub async fn delete_for_user(db: &DbConn, user_id: i32) -> Result<bool> {
    let result = LineLogin::delete_by_id(user_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
