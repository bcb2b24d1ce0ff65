//! # Product Repository
//!
//! This module contains the repository implementation for feed products,
//! including the containment match used to attach public order inquiries to
//! a product.

use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::error::RepositoryError;
use crate::models::category::Model as CategoryModel;
use crate::models::order_inquiry::{Column as InquiryColumn, Entity as OrderInquiry};
use crate::models::product::{
    ActiveModel as ProductActiveModel, Column, Entity as Product, Model as ProductModel,
};

/// Request data for creating a new product
#[derive(Debug, Clone, Default)]
pub struct CreateProductRequest {
    pub name: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub protein_percent: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Request data for updating a product; absent fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category_id: Option<i32>,
    pub description: Option<String>,
    pub protein_percent: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Repository for product database operations
pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    /// Create a new ProductRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List active products with their categories, newest first.
    ///
    /// This is the public catalog view; inactive products are excluded.
    pub async fn list_public(
        &self,
    ) -> Result<Vec<(ProductModel, Option<CategoryModel>)>, RepositoryError> {
        let products = Product::find()
            .filter(Column::IsActive.eq(true))
            .find_also_related(crate::models::category::Entity)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(products)
    }

    /// List every product with its category, newest first (admin view)
    pub async fn list_admin(
        &self,
    ) -> Result<Vec<(ProductModel, Option<CategoryModel>)>, RepositoryError> {
        let products = Product::find()
            .find_also_related(crate::models::category::Entity)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(products)
    }

    /// Get product by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let product = Product::find_by_id(id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(product)
    }

    /// Create a new product
    pub async fn create(
        &self,
        request: CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let name = self.validate_name(&request.name)?;
        self.validate_category(request.category_id).await?;
        self.validate_price(request.price)?;

        let product = ProductActiveModel {
            name: Set(name),
            category_id: Set(request.category_id),
            description: Set(request.description),
            protein_percent: Set(request.protein_percent),
            size: Set(request.size),
            price: Set(request.price),
            image_url: Set(request.image_url),
            is_active: Set(request.is_active.unwrap_or(true)),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let result = product
            .insert(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(result)
    }

    /// Update an existing product
    pub async fn update(
        &self,
        id: i32,
        request: UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let product = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Product not found".to_string()))?;

        if let Some(category_id) = request.category_id {
            self.validate_category(category_id).await?;
        }
        self.validate_price(request.price)?;

        let mut active = product.into_active_model();
        if let Some(name) = request.name {
            active.name = Set(self.validate_name(&name)?);
        }
        if let Some(category_id) = request.category_id {
            active.category_id = Set(category_id);
        }
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }
        if let Some(protein_percent) = request.protein_percent {
            active.protein_percent = Set(Some(protein_percent));
        }
        if let Some(size) = request.size {
            active.size = Set(Some(size));
        }
        if let Some(price) = request.price {
            active.price = Set(Some(price));
        }
        if let Some(image_url) = request.image_url {
            active.image_url = Set(Some(image_url));
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

    /// Delete a product.
    ///
    /// Refused with a conflict while any order inquiry still references it.
    pub async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let product = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound("Product not found".to_string()))?;

        let linked = OrderInquiry::find()
            .filter(InquiryColumn::ProductId.eq(id))
            .count(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        if linked > 0 {
            return Err(RepositoryError::Conflict(format!(
                "Cannot delete: {} order inquiry(ies) are linked to this product. \
                 Delete those inquiries first.",
                linked
            )));
        }

        product
            .delete(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    /// Match a requested product name to a stored product.
    ///
    /// Tries a case-insensitive containment match first, then falls back to
    /// the first product in the catalog so a lead is never lost over a typo.
    /// Returns `None` only when the catalog is empty.
    pub async fn find_matching(
        &self,
        requested: &str,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let needle = requested.trim().to_lowercase();

        if !needle.is_empty() {
            let matched = Product::find()
                .filter(
                    Expr::expr(Func::lower(Expr::col(Column::Name)))
                        .like(format!("%{}%", needle)),
                )
                .order_by_asc(Column::Id)
                .one(self.db)
                .await
                .map_err(RepositoryError::database_error)?;

            if matched.is_some() {
                return Ok(matched);
            }
        }

        let fallback = Product::find()
            .order_by_asc(Column::Id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(fallback)
    }

    async fn validate_category(&self, category_id: i32) -> Result<(), RepositoryError> {
        let exists = crate::models::category::Entity::find_by_id(category_id)
            .one(self.db)
            .await
            .map_err(RepositoryError::database_error)?
            .is_some();

        if !exists {
            return Err(RepositoryError::validation_error(
                "Category does not exist",
            ));
        }
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<String, RepositoryError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RepositoryError::validation_error(
                "Name and category are required",
            ));
        }
        Ok(trimmed.to_string())
    }

    fn validate_price(&self, price: Option<f64>) -> Result<(), RepositoryError> {
        if let Some(price) = price {
            if !price.is_finite() || price < 0.0 {
                return Err(RepositoryError::validation_error(
                    "Price must be non-negative",
                ));
            }
        }
        Ok(())
    }
}
