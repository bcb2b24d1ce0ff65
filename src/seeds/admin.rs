//! Admin account seeding
//!
//! Creates the configured admin account if it does not exist yet. The
//! password comes from configuration and is stored as a bcrypt hash only.

use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::repositories::AdminUserRepository;

/// Seeds the admin account from configuration
///
/// Skipped when the account already exists or when no admin password is
/// configured.
pub async fn seed_admin(db: &DatabaseConnection, config: &AppConfig) -> Result<()> {
    let repo = AdminUserRepository::new(db);

    if repo.find_by_username(&config.admin_username).await?.is_some() {
        log::info!(
            "Admin account '{}' already exists, skipping",
            config.admin_username
        );
        return Ok(());
    }

    let Some(password) = &config.admin_password else {
        log::warn!(
            "No admin password configured; admin account '{}' was not created",
            config.admin_username
        );
        return Ok(());
    };

    let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .context("Failed to hash admin password")?;

    repo.insert(&config.admin_username, &hash).await?;
    log::info!("Created admin account: {}", config.admin_username);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;
    use sea_orm::Database;

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        db
    }

    #[tokio::test]
    async fn seeds_once_and_is_idempotent() {
        let db = setup_test_db().await;
        let config = AppConfig {
            admin_password: Some("admin@123".to_string()),
            ..Default::default()
        };

        seed_admin(&db, &config).await.unwrap();
        seed_admin(&db, &config).await.unwrap();

        let repo = AdminUserRepository::new(&db);
        let admin = repo
            .verify_credentials(&config.admin_username, "admin@123")
            .await
            .unwrap();
        assert!(admin.is_some());
    }

    #[tokio::test]
    async fn missing_password_skips_creation() {
        let db = setup_test_db().await;
        let config = AppConfig {
            admin_password: None,
            ..Default::default()
        };

        seed_admin(&db, &config).await.unwrap();

        let repo = AdminUserRepository::new(&db);
        let found = repo.find_by_username(&config.admin_username).await.unwrap();
        assert!(found.is_none());
    }
}
