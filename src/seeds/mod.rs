//! # Seed Data
//!
//! This module bootstraps the store on startup: the admin account from
//! configuration and a starter catalog when the store is empty. Every seed
//! pass is idempotent.

pub mod admin;
pub mod catalog;

use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

/// Run all seed passes
pub async fn run(db: &DatabaseConnection, config: &AppConfig) -> Result<()> {
    admin::seed_admin(db, config).await?;
    catalog::seed_catalog(db).await?;
    Ok(())
}
