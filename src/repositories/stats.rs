//! # Dashboard Stats Repository
//!
//! This module aggregates the counts shown on the admin dashboard.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::RepositoryError;
use crate::models::dealer_application::Entity as DealerApplication;
use crate::models::order_inquiry::{Column as InquiryColumn, Entity as OrderInquiry, OrderStatus};
use crate::models::pincode::{Column as PincodeColumn, Entity as Pincode};
use crate::models::product::Entity as Product;

/// Counts shown on the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardStats {
    /// Total products, active and inactive
    pub products: u64,
    /// Total order inquiries in any status
    pub orders: u64,
    /// Order inquiries still pending
    pub pending_orders: u64,
    /// Active pincodes only
    pub pincodes: u64,
    /// Total dealer applications in any status
    pub dealers: u64,
}

/// Repository aggregating dashboard counts
pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    /// Create a new StatsRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collect all dashboard counts
    pub async fn collect(&self) -> Result<DashboardStats, RepositoryError> {
        let products = Product::find()
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        let orders = OrderInquiry::find()
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        let pending_orders = OrderInquiry::find()
            .filter(InquiryColumn::Status.eq(OrderStatus::Pending))
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        let pincodes = Pincode::find()
            .filter(PincodeColumn::IsActive.eq(true))
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        let dealers = DealerApplication::find()
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(DashboardStats {
            products,
            orders,
            pending_orders,
            pincodes,
            dealers,
        })
    }
}
