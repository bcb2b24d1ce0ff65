//! # Admin User Repository
//!
//! This module contains the repository implementation for admin user
//! accounts and the credential verification used by login.

use bcrypt::verify;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::error::RepositoryError;
use crate::models::admin_user::{
    ActiveModel as AdminUserActiveModel, Column, Entity as AdminUser, Model as AdminUserModel,
};

/// Repository for admin user database operations
pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserRepository<'a> {
    /// Create a new AdminUserRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Find an admin user by exact (case-sensitive) username
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminUserModel>, RepositoryError> {
        let user = AdminUser::find()
            .filter(Column::Username.eq(username))
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(user)
    }

    /// Verify a username/password pair against the stored bcrypt hash.
    ///
    /// Unknown usernames and wrong passwords both return `None` so callers
    /// cannot distinguish the two failure modes.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AdminUserModel>, RepositoryError> {
        let Some(user) = self.find_by_username(username).await? else {
            return Ok(None);
        };

        match verify(password, &user.password_hash) {
            Ok(true) => Ok(Some(user)),
            Ok(false) => Ok(None),
            Err(err) => {
                tracing::warn!(username, "Stored password hash failed to verify: {}", err);
                Ok(None)
            }
        }
    }

    /// Insert a new admin user with an already-hashed password
    pub async fn insert(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminUserModel, RepositoryError> {
        if username.trim().is_empty() {
            return Err(RepositoryError::validation_error(
                "Username cannot be empty",
            ));
        }

        let user = AdminUserActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = user
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }
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
    async fn verify_credentials_accepts_matching_password() {
        let db = setup_test_db().await;
        let repo = AdminUserRepository::new(&db);

        let hash = bcrypt::hash("admin@123", 4).unwrap();
        repo.insert("admin", &hash).await.unwrap();

        let user = repo.verify_credentials("admin", "admin@123").await.unwrap();
        assert!(user.is_some());
        assert_eq!(user.unwrap().username, "admin");
    }

    #[tokio::test]
    async fn verify_credentials_fails_uniformly() {
        let db = setup_test_db().await;
        let repo = AdminUserRepository::new(&db);

        let hash = bcrypt::hash("admin@123", 4).unwrap();
        repo.insert("admin", &hash).await.unwrap();

        // Wrong password and unknown user look the same to the caller
        let wrong = repo.verify_credentials("admin", "nope").await.unwrap();
        assert!(wrong.is_none());

        let unknown = repo.verify_credentials("ghost", "admin@123").await.unwrap();
        assert!(unknown.is_none());
    }

    #[tokio::test]
    async fn username_is_case_sensitive() {
        let db = setup_test_db().await;
        let repo = AdminUserRepository::new(&db);

        let hash = bcrypt::hash("admin@123", 4).unwrap();
        repo.insert("admin", &hash).await.unwrap();

        let result = repo.verify_credentials("Admin", "admin@123").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let db = setup_test_db().await;
        let repo = AdminUserRepository::new(&db);

        let hash = bcrypt::hash("x", 4).unwrap();
        repo.insert("admin", &hash).await.unwrap();

        let result = repo.insert("admin", &hash).await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }
}
