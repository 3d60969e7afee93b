use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique, indexed)]
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub create_at: DateTimeUtc,
    pub last_login_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::line_login::Entity")]
    LineLogin,
    #[sea_orm(has_one = "super::line_notify::Entity")]
    LineNotify,
    #[sea_orm(has_many = "super::line_notify_record::Entity")]
    LineNotifyRecords,
}

impl Related<super::line_login::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineLogin.def()
    }
}

impl Related<super::line_notify::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineNotify.def()
    }
}

impl Related<super::line_notify_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineNotifyRecords.def()
    }
}

impl Model {
    /// Accounts created through LINE Login carry no local password
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

impl ActiveModelBehavior for ActiveModel {}
