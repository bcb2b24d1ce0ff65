//! # Dealer Application Repository
//!
//! This module contains the repository implementation for dealership
//! applications submitted through the public form.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

use crate::error::RepositoryError;
use crate::models::dealer_application::{
    ActiveModel as DealerActiveModel, Column, DealerStatus, Entity as DealerApplication,
    Model as DealerModel,
};

/// Request data for submitting a new dealer application
#[derive(Debug, Clone, Default)]
pub struct SubmitDealerRequest {
    pub name: String,
    pub phone: String,
    pub business: Option<String>,
    pub city: Option<String>,
    pub details: String,
}

/// Repository for dealer application database operations
pub struct DealerApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DealerApplicationRepository<'a> {
    /// Create a new DealerApplicationRepository with the given connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all dealer applications, newest first
    pub async fn list(&self) -> Result<Vec<DealerModel>, RepositoryError> {
        let applications = DealerApplication::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(applications)
    }

    /// Submit a new dealer application from the public form
    pub async fn submit(
        &self,
        request: SubmitDealerRequest,
    ) -> Result<DealerModel, RepositoryError> {
        let required = [
            ("name", &request.name),
            ("phone", &request.phone),
            ("details", &request.details),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(RepositoryError::Validation(format!(
                    "Missing required field: {}",
                    field
                )));
            }
        }

        let application = DealerActiveModel {
            name: Set(request.name.trim().to_string()),
            phone: Set(request.phone.trim().to_string()),
            business: Set(request.business.unwrap_or_default()),
            city: Set(request.city.unwrap_or_default()),
            details: Set(request.details.trim().to_string()),
            status: Set(DealerStatus::Pending),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = application
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Update the lifecycle status of an application
    pub async fn update_status(
        &self,
        id: i32,
        status: DealerStatus,
    ) -> Result<DealerModel, RepositoryError> {
        let application = DealerApplication::find_by_id(id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Dealer application not found".to_string()))?;

        let mut active = application.into_active_model();
        active.status = Set(status);

        let result = active
            .update(self.db)
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

    fn submit_request() -> SubmitDealerRequest {
        SubmitDealerRequest {
            name: "Santanu Paul".to_string(),
            phone: "9830012345".to_string(),
            business: Some("Paul Agro Traders".to_string()),
            city: None,
            details: "Interested in a district dealership".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_starts_pending_with_optional_fields_defaulted() {
        let db = setup_test_db().await;
        let repo = DealerApplicationRepository::new(&db);

        let application = repo.submit(submit_request()).await.unwrap();

        assert_eq!(application.status, DealerStatus::Pending);
        assert_eq!(application.business, "Paul Agro Traders");
        assert_eq!(application.city, "");
    }

    #[tokio::test]
    async fn submit_requires_name_phone_and_details() {
        let db = setup_test_db().await;
        let repo = DealerApplicationRepository::new(&db);

        let mut request = submit_request();
        request.details = String::new();

        let result = repo.submit(request).await;
        match result {
            Err(RepositoryError::Validation(message)) => {
                assert!(message.contains("details"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn status_updates_are_persisted() {
        let db = setup_test_db().await;
        let repo = DealerApplicationRepository::new(&db);

        let application = repo.submit(submit_request()).await.unwrap();

        let reviewing = repo
            .update_status(application.id, DealerStatus::Reviewing)
            .await
            .unwrap();
        assert_eq!(reviewing.status, DealerStatus::Reviewing);

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].status, DealerStatus::Reviewing);
    }

    #[tokio::test]
    async fn update_missing_application_is_not_found() {
        let db = setup_test_db().await;
        let repo = DealerApplicationRepository::new(&db);

        let result = repo.update_status(404, DealerStatus::Accepted).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
