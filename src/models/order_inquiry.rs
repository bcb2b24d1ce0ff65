//! Order inquiry entity model
//!
//! This module contains the SeaORM entity model for the order_inquiries
//! table, one row per lead submitted through the public order form.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of an order inquiry.
///
/// Deliberately distinct from [`super::DealerStatus`]; the two enums share
/// some value names but must not be cross-assignable.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "CONTACTED")]
    Contacted,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "CANCELLED")]
    Cancelled,
}

impl OrderStatus {
    /// Parses the wire representation, returning `None` for anything outside
    /// the enum.
    pub fn parse(value: &str) -> Option<Self> {
        Self::try_from_value(&value.to_owned()).ok()
    }
}

/// Order inquiry entity representing one customer lead
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "order_inquiries")]
pub struct Model {
    /// Unique identifier for the inquiry (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Customer name
    pub customer_name: String,

    /// Customer phone number
    pub phone: String,

    /// Product the inquiry was matched to (mandatory foreign key)
    pub product_id: i32,

    /// Requested quantity as free text
    pub quantity: String,

    /// Delivery district
    pub district: String,

    /// Delivery state
    pub state: String,

    /// Delivery pincode as submitted (not validated against the registry)
    pub pincode: String,

    /// Delivery address
    pub address: String,

    /// Free-form notes
    pub notes: String,

    /// Lifecycle status, PENDING on creation
    pub status: OrderStatus,

    /// Timestamp when the inquiry was submitted
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_enum_value() {
        assert_eq!(OrderStatus::parse("PENDING"), Some(OrderStatus::Pending));
        assert_eq!(OrderStatus::parse("CONTACTED"), Some(OrderStatus::Contacted));
        assert_eq!(OrderStatus::parse("COMPLETED"), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::parse("CANCELLED"), Some(OrderStatus::Cancelled));
    }

    #[test]
    fn rejects_values_outside_the_enum() {
        assert_eq!(OrderStatus::parse("INVALID"), None);
        assert_eq!(OrderStatus::parse("pending"), None);
        assert_eq!(OrderStatus::parse(""), None);
        // Dealer-only value must not cross over
        assert_eq!(OrderStatus::parse("REVIEWING"), None);
    }

    #[test]
    fn serializes_in_wire_format() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
    }
}
