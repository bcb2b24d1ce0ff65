//! # Category Repository
//!
//! This module contains the repository implementation for catalog
//! categories. Deletion is guarded: a category with linked products cannot
//! be removed until the products are reassigned or deleted.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::error::RepositoryError;
use crate::models::category::{
    ActiveModel as CategoryActiveModel, Column, Entity as Category, Model as CategoryModel,
};
use crate::models::product::{Column as ProductColumn, Entity as Product};

/// Request data for creating a new category
#[derive(Debug, Clone)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Request data for updating a category; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Repository for category database operations
pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new CategoryRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all categories ordered by display order
    pub async fn list(&self) -> Result<Vec<CategoryModel>, RepositoryError> {
        let categories = Category::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(categories)
    }

    /// List all categories with the number of products linked to each
    pub async fn list_with_product_counts(
        &self,
    ) -> Result<Vec<(CategoryModel, u64)>, RepositoryError> {
        let categories = self.list().await?;

        let mut result = Vec::with_capacity(categories.len());
        for category in categories {
            let count = self.product_count(category.id).await?;
            result.push((category, count));
        }

        Ok(result)
    }

    /// Get category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CategoryModel>, RepositoryError> {
        let category = Category::find_by_id(id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(category)
    }

    /// Check if a category exists
    pub async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.get_by_id(id).await?.is_some())
    }

    /// Create a new category
    pub async fn create(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        let name = self.validate_name(&request.name)?;

        let category = CategoryActiveModel {
            name: Set(name),
            image_url: Set(request.image_url),
            display_order: Set(request.display_order.unwrap_or(0)),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = category
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Update an existing category
    pub async fn update(
        &self,
        id: i32,
        request: UpdateCategoryRequest,
    ) -> Result<CategoryModel, RepositoryError> {
        let category = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Category not found".to_string()))?;

        let mut active = category.into_active_model();
        if let Some(name) = request.name {
            active.name = Set(self.validate_name(&name)?);
        }
        if let Some(image_url) = request.image_url {
            active.image_url = Set(Some(image_url));
        }
        if let Some(display_order) = request.display_order {
            active.display_order = Set(display_order);
        }

        let result = active
            .update(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Delete a category.
    ///
    /// Refused with a conflict while any product still references it.
    pub async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let category = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Category not found".to_string()))?;

        let linked = self.product_count(id).await?;
        if linked > 0 {
            return Err(RepositoryError::Conflict(format!(
                "Cannot delete: {} product(s) are linked to this category. \
                 Reassign or delete those products first.",
                linked
            )));
        }

        category
            .delete(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    async fn product_count(&self, category_id: i32) -> Result<u64, RepositoryError> {
        let count = Product::find()
            .filter(ProductColumn::CategoryId.eq(category_id))
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(count)
    }

    fn validate_name(&self, name: &str) -> Result<String, RepositoryError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RepositoryError::validation_error("Name is required"));
        }
        Ok(trimmed.to_string())
    }
}
