//! # Data Models
//!
//! This module contains all the data models used throughout the Aquafeed API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod admin_user;
pub mod category;
pub mod dealer_application;
pub mod order_inquiry;
pub mod pincode;
pub mod product;

pub use admin_user::Entity as AdminUser;
pub use category::Entity as Category;
pub use dealer_application::Entity as DealerApplication;
pub use order_inquiry::Entity as OrderInquiry;
pub use pincode::Entity as Pincode;
pub use product::Entity as Product;

pub use dealer_application::DealerStatus;
pub use order_inquiry::OrderStatus;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "aquafeed-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
