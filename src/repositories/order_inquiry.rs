//! # Order Inquiry Repository
//!
//! This module contains the repository implementation for order inquiries,
//! the leads captured by the public order form. Submission attaches every
//! lead to a product via the catalog matching rules.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::error::RepositoryError;
use crate::models::category::{Entity as Category, Model as CategoryModel};
use crate::models::order_inquiry::{
    ActiveModel as InquiryActiveModel, Column, Entity as OrderInquiry, Model as InquiryModel,
    OrderStatus,
};
use crate::models::product::Model as ProductModel;
use crate::repositories::product::ProductRepository;

/// Request data for submitting a new order inquiry from the public form
#[derive(Debug, Clone, Default)]
pub struct SubmitInquiryRequest {
    pub customer_name: String,
    pub phone: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
    pub address: String,
    /// Requested product name as typed by the customer
    pub product: Option<String>,
    pub quantity: Option<String>,
    pub notes: Option<String>,
}

/// One inquiry joined with its product and the product's category
#[derive(Debug, Clone)]
pub struct InquiryDetail {
    pub inquiry: InquiryModel,
    pub product: Option<ProductModel>,
    pub category: Option<CategoryModel>,
}

/// Repository for order inquiry database operations
pub struct OrderInquiryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderInquiryRepository<'a> {
    /// Create a new OrderInquiryRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all inquiries with product and category detail, newest first
    pub async fn list_detailed(&self) -> Result<Vec<InquiryDetail>, RepositoryError> {
        let rows = OrderInquiry::find()
            .find_also_related(crate::models::product::Entity)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        let category_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, product)| product.as_ref().map(|p| p.category_id))
            .collect();

        let categories: HashMap<i32, CategoryModel> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            Category::find()
                .filter(crate::models::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await
                .map_err(RepositoryError::database_error)?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let details = rows
            .into_iter()
            .map(|(inquiry, product)| {
                let category = product
                    .as_ref()
                    .and_then(|p| categories.get(&p.category_id).cloned());
                InquiryDetail {
                    inquiry,
                    product,
                    category,
                }
            })
            .collect();

        Ok(details)
    }

    /// Submit a new inquiry from the public order form.
    ///
    /// The requested product name is matched against the catalog; the lead
    /// is refused only when the catalog is empty. Returns the stored inquiry
    /// together with the product it was attached to.
    pub async fn submit(
        &self,
        request: SubmitInquiryRequest,
    ) -> Result<(InquiryModel, ProductModel), RepositoryError> {
        self.validate_required(&request)?;

        let product = ProductRepository::new(self.db)
            .find_matching(request.product.as_deref().unwrap_or(""))
            .await?
            .ok_or_else(|| {
                RepositoryError::validation_error("No products available to order")
            })?;

        let inquiry = InquiryActiveModel {
            customer_name: Set(request.customer_name.trim().to_string()),
            phone: Set(request.phone.trim().to_string()),
            product_id: Set(product.id),
            quantity: Set(request
                .quantity
                .filter(|q| !q.trim().is_empty())
                .unwrap_or_else(|| "Not specified".to_string())),
            district: Set(request.district.trim().to_string()),
            state: Set(request.state.trim().to_string()),
            pincode: Set(request.pincode.trim().to_string()),
            address: Set(request.address.trim().to_string()),
            notes: Set(request.notes.unwrap_or_default()),
            status: Set(OrderStatus::Pending),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = inquiry
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok((result, product))
    }

    /// Update the lifecycle status of an inquiry
    pub async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<InquiryModel, RepositoryError> {
        let inquiry = OrderInquiry::find_by_id(id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Order not found".to_string()))?;

        let mut active = inquiry.into_active_model();
        active.status = Set(status);

        let result = active
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Delete an inquiry
    pub async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let inquiry = OrderInquiry::find_by_id(id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or_else(|| RepositoryError::NotFound("Order not found".to_string()))?;

        inquiry
            .delete(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    fn validate_required(&self, request: &SubmitInquiryRequest) -> Result<(), RepositoryError> {
        let required = [
            ("customer_name", &request.customer_name),
            ("phone", &request.phone),
            ("district", &request.district),
            ("state", &request.state),
            ("pincode", &request.pincode),
            ("address", &request.address),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(RepositoryError::Validation(format!(
                    "Missing required field: {}",
                    field
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::category::{CategoryRepository, CreateCategoryRequest};
    use crate::repositories::product::{CreateProductRequest, ProductRepository};
    use migration::MigratorTrait;
    use sea_orm::Database;

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn seed_product(db: &DatabaseConnection, name: &str) -> i32 {
        let category = CategoryRepository::new(db)
            .create(CreateCategoryRequest {
                name: "Floating Feed".to_string(),
                image_url: None,
                display_order: Some(1),
            })
            .await
            .unwrap();

        ProductRepository::new(db)
            .create(CreateProductRequest {
                name: name.to_string(),
                category_id: category.id,
                ..Default::default()
            })
            .await
            .unwrap()
            .id
    }

    fn submit_request(product: Option<&str>) -> SubmitInquiryRequest {
        SubmitInquiryRequest {
            customer_name: "Ravi Das".to_string(),
            phone: "9876543210".to_string(),
            district: "Hooghly".to_string(),
            state: "West Bengal".to_string(),
            pincode: "712103".to_string(),
            address: "Village road".to_string(),
            product: product.map(str::to_string),
            quantity: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn submit_fills_defaults_and_starts_pending() {
        let db = setup_test_db().await;
        let product_id = seed_product(&db, "Grower 2mm").await;
        let repo = OrderInquiryRepository::new(&db);

        let (inquiry, product) = repo.submit(submit_request(Some("grower"))).await.unwrap();

        assert_eq!(product.id, product_id);
        assert_eq!(inquiry.product_id, product_id);
        assert_eq!(inquiry.quantity, "Not specified");
        assert_eq!(inquiry.notes, "");
        assert_eq!(inquiry.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn submit_requires_every_lead_field() {
        let db = setup_test_db().await;
        seed_product(&db, "Grower 2mm").await;
        let repo = OrderInquiryRepository::new(&db);

        let mut request = submit_request(None);
        request.phone = "  ".to_string();

        let result = repo.submit(request).await;
        match result {
            Err(RepositoryError::Validation(message)) => {
                assert!(message.contains("phone"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn submit_with_empty_catalog_is_refused() {
        let db = setup_test_db().await;
        let repo = OrderInquiryRepository::new(&db);

        let result = repo.submit(submit_request(Some("anything"))).await;
        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[tokio::test]
    async fn unmatched_product_falls_back_instead_of_failing() {
        let db = setup_test_db().await;
        let product_id = seed_product(&db, "Grower 2mm").await;
        let repo = OrderInquiryRepository::new(&db);

        let (inquiry, _) = repo
            .submit(submit_request(Some("totally unknown feed")))
            .await
            .unwrap();

        assert_eq!(inquiry.product_id, product_id);
    }

    #[tokio::test]
    async fn status_lifecycle_and_delete() {
        let db = setup_test_db().await;
        seed_product(&db, "Grower 2mm").await;
        let repo = OrderInquiryRepository::new(&db);

        let (inquiry, _) = repo.submit(submit_request(None)).await.unwrap();

        let contacted = repo
            .update_status(inquiry.id, OrderStatus::Contacted)
            .await
            .unwrap();
        assert_eq!(contacted.status, OrderStatus::Contacted);

        repo.delete(inquiry.id).await.unwrap();
        assert!(matches!(
            repo.update_status(inquiry.id, OrderStatus::Completed).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn listing_joins_product_and_category() {
        let db = setup_test_db().await;
        seed_product(&db, "Grower 2mm").await;
        let repo = OrderInquiryRepository::new(&db);

        repo.submit(submit_request(Some("grower"))).await.unwrap();

        let listed = repo.list_detailed().await.unwrap();
        assert_eq!(listed.len(), 1);

        let detail = &listed[0];
        assert_eq!(
            detail.product.as_ref().map(|p| p.name.as_str()),
            Some("Grower 2mm")
        );
        assert_eq!(
            detail.category.as_ref().map(|c| c.name.as_str()),
            Some("Floating Feed")
        );
    }
}
