//! Account storage: creation, lookup, profile updates and password login.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set};

use crate::db::DbConn;
use crate::error::{AppError, Result};
use crate::models::prelude::*;
use crate::models::user;
use crate::schemas::{CreateUser, UpdateUser};
use crate::services::security::{hash_password, verify_password};

/// Insert a new user, hashing the password if one is given
pub async fn create_user(db: &DbConn, input: CreateUser) -> Result<user::Model> {
    let password_hash = input.password.as_deref().map(hash_password).transpose()?;

    let new_user = user::ActiveModel {
        name: Set(input.name),
        email: Set(input.email),
        password_hash: Set(password_hash),
        create_at: Set(Utc::now()),
        last_login_at: Set(input.last_login_at),
        ..Default::default()
    };

    let user = new_user.insert(db).await?;
    tracing::debug!(user_id = user.id, "User created");
    Ok(user)
}

pub async fn find_by_id(db: &DbConn, id: i32) -> Result<Option<user::Model>> {
    Ok(User::find_by_id(id).one(db).await?)
}

pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<user::Model>> {
    Ok(User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?)
}

pub async fn get_user(db: &DbConn, id: i32) -> Result<user::Model> {
    find_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
}

/// Apply a partial profile update
pub async fn update_profile(db: &DbConn, id: i32, update: UpdateUser) -> Result<user::Model> {
    let mut active = get_user(db, id).await?.into_active_model();

    if let Some(name) = update.name {
        active.name = Set(name);
    }
    if let Some(email) = update.email {
        active.email = Set(email);
    }
    if let Some(password) = update.password.as_deref() {
        active.password_hash = Set(Some(hash_password(password)?));
    }

    Ok(active.update(db).await?)
}

/// Stamp `last_login_at` with the current time
pub async fn touch_last_login(db: &DbConn, id: i32) -> Result<user::Model> {
    let mut active = get_user(db, id).await?.into_active_model();
    active.last_login_at = Set(Some(Utc::now()));
    Ok(active.update(db).await?)
}

/// Check an email/password pair and record the login on success
pub async fn authenticate(db: &DbConn, email: &str, password: &str) -> Result<user::Model> {
    let invalid = || AppError::Unauthorized("Incorrect username or password".to_string());

    let Some(user) = find_by_email(db, email).await? else {
        tracing::info!("Invalid e-mail");
        return Err(invalid());
    };

    let Some(hash) = user.password_hash.as_deref() else {
        tracing::info!(user_id = user.id, "Account has no password");
        return Err(invalid());
    };

    if !verify_password(password, hash) {
        tracing::info!(user_id = user.id, "Invalid password");
        return Err(invalid());
    }

    touch_last_login(db, user.id).await
}

/// Delete a user. Dependent LINE rows go with it through the cascading
/// foreign keys.
pub async fn delete_user(db: &DbConn, id: i32) -> Result<()> {
    let result = User::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!("User {} not found", id)));
    }
    tracing::info!(user_id = id, "User deleted");
    Ok(())
}
