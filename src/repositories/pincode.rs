//! # Pincode Repository
//!
//! This module contains the repository implementation for the deliverable
//! pincode registry, including the public deliverability check.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::error::RepositoryError;
use crate::models::pincode::{
    ActiveModel as PincodeActiveModel, Column, Entity as Pincode, Model as PincodeModel,
};

/// Request data for creating a new pincode record
#[derive(Debug, Clone)]
pub struct CreatePincodeRequest {
    pub code: String,
    pub area: Option<String>,
    pub is_active: Option<bool>,
}

/// Request data for updating a pincode record; absent fields are unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdatePincodeRequest {
    pub code: Option<String>,
    pub area: Option<String>,
    pub is_active: Option<bool>,
}

/// Repository for pincode database operations
pub struct PincodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PincodeRepository<'a> {
    /// Create a new PincodeRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all pincode records, newest first
    pub async fn list(&self) -> Result<Vec<PincodeModel>, RepositoryError> {
        let pincodes = Pincode::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(pincodes)
    }

    /// Get pincode record by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PincodeModel>, RepositoryError> {
        let pincode = Pincode::find_by_id(id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(pincode)
    }

    /// Find the active record matching a code exactly, if any.
    ///
    /// Delivery is available only on an exact match against an active
    /// record; unknown and deactivated codes both report unavailable.
    pub async fn find_deliverable(
        &self,
        code: &str,
    ) -> Result<Option<PincodeModel>, RepositoryError> {
        let found = Pincode::find()
            .filter(Column::Code.eq(code.trim()))
            .filter(Column::IsActive.eq(true))
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(found)
    }

    /// Check whether delivery is available for a code
    pub async fn is_deliverable(&self, code: &str) -> Result<bool, RepositoryError> {
        Ok(self.find_deliverable(code).await?.is_some())
    }

    /// Create a new pincode record
    pub async fn create(
        &self,
        request: CreatePincodeRequest,
    ) -> Result<PincodeModel, RepositoryError> {
        let code = self.validate_code(&request.code)?;

        let pincode = PincodeActiveModel {
            code: Set(code),
            area: Set(request.area.unwrap_or_default()),
            is_active: Set(request.is_active.unwrap_or(true)),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = pincode
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Update an existing pincode record
    pub async fn update(
        &self,
        id: i32,
        request: UpdatePincodeRequest,
    ) -> Result<PincodeModel, RepositoryError> {
        let pincode = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Pincode not found".to_string()))?;

        let mut active = pincode.into_active_model();
        if let Some(code) = request.code {
            active.code = Set(self.validate_code(&code)?);
        }
        if let Some(area) = request.area {
            active.area = Set(area);
        }
        if let Some(is_active) = request.is_active {
            active.is_active = Set(is_active);
        }

        let result = active
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Delete a pincode record
    pub async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let pincode = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Pincode not found".to_string()))?;

        pincode
            .delete(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    fn validate_code(&self, code: &str) -> Result<String, RepositoryError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(RepositoryError::validation_error("Pincode is required"));
        }
        if trimmed.len() != 6 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(RepositoryError::validation_error(
                "Pincode must be exactly 6 digits",
            ));
        }
        Ok(trimmed.to_string())
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

    fn create_request(code: &str) -> CreatePincodeRequest {
        CreatePincodeRequest {
            code: code.to_string(),
            area: Some("Kolkata".to_string()),
            is_active: None,
        }
    }

    #[tokio::test]
    async fn create_validates_code_shape() {
        let db = setup_test_db().await;
        let repo = PincodeRepository::new(&db);

        for bad in ["", "12345", "1234567", "70000a", "70 001"] {
            let result = repo.create(create_request(bad)).await;
            assert!(
                matches!(result, Err(RepositoryError::Validation(_))),
                "code {:?} should be rejected",
                bad
            );
        }

        repo.create(create_request("700001")).await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_code_is_a_conflict() {
        let db = setup_test_db().await;
        let repo = PincodeRepository::new(&db);

        repo.create(create_request("700001")).await.unwrap();
        let result = repo.create(create_request("700001")).await;

        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }

    #[tokio::test]
    async fn deliverability_requires_active_exact_match() {
        let db = setup_test_db().await;
        let repo = PincodeRepository::new(&db);

        let active = repo.create(create_request("700001")).await.unwrap();
        assert!(repo.is_deliverable("700001").await.unwrap());
        assert!(repo.is_deliverable(" 700001 ").await.unwrap());
        assert!(!repo.is_deliverable("700002").await.unwrap());

        // Deactivating the record turns the check off without deleting it
        repo.update(
            active.id,
            UpdatePincodeRequest {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert!(!repo.is_deliverable("700001").await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let db = setup_test_db().await;
        let repo = PincodeRepository::new(&db);

        let created = repo.create(create_request("700001")).await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(created.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
