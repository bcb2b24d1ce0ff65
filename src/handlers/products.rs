//! # Product Handlers
//!
//! This module contains the public product listing and the admin product
//! CRUD endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::AdminSession;
use crate::error::ApiError;
use crate::models::category::Model as CategoryModel;
use crate::models::product::Model as ProductModel;
use crate::repositories::ProductRepository;
use crate::repositories::product::{CreateProductRequest, UpdateProductRequest};
use crate::server::AppState;

/// Category reference embedded in product views
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryRef {
    pub id: i32,
    pub name: String,
}

impl From<CategoryModel> for CategoryRef {
    fn from(model: CategoryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Product fields safe for public consumption
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicProduct {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<CategoryRef>,
    pub protein_percent: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl PublicProduct {
    fn from_joined(model: ProductModel, category: Option<CategoryModel>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            category: category.map(Into::into),
            protein_percent: model.protein_percent,
            size: model.size,
            price: model.price,
            image_url: model.image_url,
        }
    }
}

/// Product as shown in the admin panel
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminProduct {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub category: Option<CategoryRef>,
    pub protein_percent: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl AdminProduct {
    fn from_joined(model: ProductModel, category: Option<CategoryModel>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            category_id: model.category_id,
            category: category.map(Into::into),
            protein_percent: model.protein_percent,
            size: model.size,
            price: model.price,
            image_url: model.image_url,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

/// Request body for creating a product
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductBody {
    pub name: String,
    pub category_id: i32,
    pub description: Option<String>,
    pub protein_percent: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Request body for updating a product; absent fields are unchanged
#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct UpdateProductBody {
    pub name: Option<String>,
    pub category_id: Option<i32>,
    pub description: Option<String>,
    pub protein_percent: Option<String>,
    pub size: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Public endpoint listing active products with their categories
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Active products, newest first", body = [PublicProduct])
    ),
    tag = "catalog"
)]
pub async fn list_public_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicProduct>>, ApiError> {
    let products = ProductRepository::new(&state.db).list_public().await?;

    Ok(Json(
        products
            .into_iter()
            .map(|(product, category)| PublicProduct::from_joined(product, category))
            .collect(),
    ))
}

/// Admin endpoint listing every product, newest first
#[utoipa::path(
    get,
    path = "/admin/products",
    responses(
        (status = 200, description = "All products", body = [AdminProduct]),
        (status = 401, description = "Unauthorized", body = ApiError)
    ),
    tag = "admin-products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<Vec<AdminProduct>>, ApiError> {
    let products = ProductRepository::new(&state.db).list_admin().await?;

    Ok(Json(
        products
            .into_iter()
            .map(|(product, category)| AdminProduct::from_joined(product, category))
            .collect(),
    ))
}

/// Admin endpoint creating a product
#[utoipa::path(
    post,
    path = "/admin/products",
    request_body = CreateProductBody,
    responses(
        (status = 201, description = "Product created", body = AdminProduct),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError)
    ),
    tag = "admin-products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    session: AdminSession,
    Json(body): Json<CreateProductBody>,
) -> Result<(StatusCode, Json<AdminProduct>), ApiError> {
    let created = ProductRepository::new(&state.db)
        .create(CreateProductRequest {
            name: body.name,
            category_id: body.category_id,
            description: body.description,
            protein_percent: body.protein_percent,
            size: body.size,
            price: body.price,
            image_url: body.image_url,
            is_active: body.is_active,
        })
        .await?;

    tracing::info!(admin = %session.username, product = %created.name, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(AdminProduct::from_joined(created, None)),
    ))
}

/// Admin endpoint updating a product
#[utoipa::path(
    put,
    path = "/admin/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductBody,
    responses(
        (status = 200, description = "Product updated", body = AdminProduct),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "Product not found", body = ApiError)
    ),
    tag = "admin-products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdateProductBody>,
) -> Result<Json<AdminProduct>, ApiError> {
    let updated = ProductRepository::new(&state.db)
        .update(
            id,
            UpdateProductRequest {
                name: body.name,
                category_id: body.category_id,
                description: body.description,
                protein_percent: body.protein_percent,
                size: body.size,
                price: body.price,
                image_url: body.image_url,
                is_active: body.is_active,
            },
        )
        .await?;

    tracing::info!(admin = %session.username, product_id = id, "Product updated");

    Ok(Json(AdminProduct::from_joined(updated, None)))
}

/// Admin endpoint deleting a product
#[utoipa::path(
    delete,
    path = "/admin/products/{id}",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "Product not found", body = ApiError),
        (status = 409, description = "Order inquiries still linked", body = ApiError)
    ),
    tag = "admin-products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    ProductRepository::new(&state.db).delete(id).await?;

    tracing::info!(admin = %session.username, product_id = id, "Product deleted");

    Ok(Json(serde_json::json!({ "success": true })))
}
