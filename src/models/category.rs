//! Category entity model
//!
//! This module contains the SeaORM entity model for the categories table,
//! the top level of the public catalog. Categories own their display-order
//! slot and may not be deleted while products still reference them.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

/// Category entity representing a catalog section
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name (non-empty after trimming)
    pub name: String,

    /// Optional hosted image reference
    pub image_url: Option<String>,

    /// Ascending sort key for public listings
    pub display_order: i32,

    /// Timestamp when the category was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
