//! Admin user entity model
//!
//! This module contains the SeaORM entity model for the admin_users table.
//! Only the bcrypt hash of the password is persisted; the cleartext never
//! leaves the login handler.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Admin user entity consumed by the credential authenticator
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_users")]
pub struct Model {
    /// Unique identifier for the admin user (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Login name (unique, case-sensitive)
    pub username: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
