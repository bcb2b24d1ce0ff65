//! Dealer application entity model
//!
//! This module contains the SeaORM entity model for the dealer_applications
//! table, one row per dealership lead submitted through the public form.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of a dealer application.
///
/// Distinct from [`super::OrderStatus`] by design: the value sets differ and
/// the types must not be interchangeable.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealerStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "REVIEWING")]
    Reviewing,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "REJECTED")]
    Rejected,
}

impl DealerStatus {
    /// Parses the wire representation, returning `None` for anything outside
    /// the enum.
    pub fn parse(value: &str) -> Option<Self> {
        Self::try_from_value(&value.to_owned()).ok()
    }
}

/// Dealer application entity representing one dealership lead
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "dealer_applications")]
pub struct Model {
    /// Unique identifier for the application (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Applicant name
    pub name: String,

    /// Applicant phone number
    pub phone: String,

    /// Existing business name, empty when not supplied
    pub business: String,

    /// City, empty when not supplied
    pub city: String,

    /// Free-form application details
    pub details: String,

    /// Lifecycle status, PENDING on creation
    pub status: DealerStatus,

    /// Timestamp when the application was submitted
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_enum_value() {
        assert_eq!(DealerStatus::parse("PENDING"), Some(DealerStatus::Pending));
        assert_eq!(
            DealerStatus::parse("REVIEWING"),
            Some(DealerStatus::Reviewing)
        );
        assert_eq!(DealerStatus::parse("ACCEPTED"), Some(DealerStatus::Accepted));
        assert_eq!(DealerStatus::parse("REJECTED"), Some(DealerStatus::Rejected));
    }

    #[test]
    fn rejects_values_outside_the_enum() {
        assert_eq!(DealerStatus::parse("INVALID"), None);
        // Order-only values must not cross over
        assert_eq!(DealerStatus::parse("CONTACTED"), None);
        assert_eq!(DealerStatus::parse("COMPLETED"), None);
    }
}
