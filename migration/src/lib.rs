//! Database migrations for the Aquafeed API.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_12_01_000100_create_admin_users;
mod m2025_12_01_000200_create_categories;
mod m2025_12_01_000300_create_products;
mod m2025_12_01_000400_create_pincodes;
mod m2025_12_01_000500_create_order_inquiries;
mod m2025_12_01_000600_create_dealer_applications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_12_01_000100_create_admin_users::Migration),
            Box::new(m2025_12_01_000200_create_categories::Migration),
            Box::new(m2025_12_01_000300_create_products::Migration),
            Box::new(m2025_12_01_000400_create_pincodes::Migration),
            Box::new(m2025_12_01_000500_create_order_inquiries::Migration),
            Box::new(m2025_12_01_000600_create_dealer_applications::Migration),
        ]
    }
}
