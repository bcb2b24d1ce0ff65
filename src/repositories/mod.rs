//! # Repositories
//!
//! This module contains the repository layer, one repository per entity plus
//! the dashboard aggregation. Repositories own all validation that guards the
//! store: a request that fails validation returns before any write happens.

pub mod admin_user;
pub mod category;
pub mod dealer_application;
pub mod order_inquiry;
pub mod pincode;
pub mod product;
pub mod stats;

pub use admin_user::AdminUserRepository;
pub use category::CategoryRepository;
pub use dealer_application::DealerApplicationRepository;
pub use order_inquiry::OrderInquiryRepository;
pub use pincode::PincodeRepository;
pub use product::ProductRepository;
pub use stats::StatsRepository;
