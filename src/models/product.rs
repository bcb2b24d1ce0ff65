//! Product entity model
//!
//! This module contains the SeaORM entity model for the products table.
//! Every product references exactly one category; the `is_active` flag gates
//! visibility in public listings but not in admin listings.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;

/// Product entity representing one feed product
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name
    pub name: String,

    /// Marketing description
    pub description: Option<String>,

    /// Owning category (mandatory foreign key)
    pub category_id: i32,

    /// Protein content as printed on the bag, e.g. "32%"
    pub protein_percent: Option<String>,

    /// Pellet size as free text, e.g. "2-3mm"
    pub size: Option<String>,

    /// Price per kg; non-negative when present
    pub price: Option<f64>,

    /// Optional hosted image reference
    pub image_url: Option<String>,

    /// Whether the product appears in public listings
    pub is_active: bool,

    /// Timestamp when the product was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::order_inquiry::Entity")]
    OrderInquiry,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::order_inquiry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderInquiry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
