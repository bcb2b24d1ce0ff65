//! Pincode entity model
//!
//! This module contains the SeaORM entity model for the pincodes table,
//! the registry of serviceable delivery areas. The code column carries a
//! unique constraint.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use utoipa::ToSchema;

/// Pincode entity representing one serviceable delivery area
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, ToSchema)]
#[schema(as = Pincode)]
#[sea_orm(table_name = "pincodes")]
pub struct Model {
    /// Unique identifier for the pincode record (primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// 6-digit postal code (unique)
    pub code: String,

    /// Human-readable area label
    pub area: String,

    /// Only active pincodes satisfy the public deliverability check
    pub is_active: bool,

    /// Timestamp when the record was created
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
