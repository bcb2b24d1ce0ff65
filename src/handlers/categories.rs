//! # Category Handlers
//!
//! This module contains the public category listing and the admin category
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
use crate::repositories::CategoryRepository;
use crate::repositories::category::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::server::AppState;

/// Category fields safe for public consumption
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicCategory {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub display_order: i32,
}

impl From<CategoryModel> for PublicCategory {
    fn from(model: CategoryModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
            display_order: model.display_order,
        }
    }
}

/// Category as shown in the admin panel, with its linked-product count
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminCategory {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub product_count: u64,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl AdminCategory {
    fn from_counted(model: CategoryModel, product_count: u64) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image_url: model.image_url,
            display_order: model.display_order,
            product_count,
            created_at: model.created_at,
        }
    }
}

/// Request body for creating a category
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryBody {
    pub name: String,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Request body for updating a category; absent fields are unchanged
#[derive(Debug, Deserialize, ToSchema, Default)]
pub struct UpdateCategoryBody {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Public endpoint listing categories for the catalog pages
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Categories ordered for display", body = [PublicCategory])
    ),
    tag = "catalog"
)]
pub async fn list_public_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicCategory>>, ApiError> {
    let categories = CategoryRepository::new(&state.db).list().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// Admin endpoint listing categories with product counts
#[utoipa::path(
    get,
    path = "/admin/categories",
    responses(
        (status = 200, description = "Categories with product counts", body = [AdminCategory]),
        (status = 401, description = "Unauthorized", body = ApiError)
    ),
    tag = "admin-categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<Vec<AdminCategory>>, ApiError> {
    let counted = CategoryRepository::new(&state.db)
        .list_with_product_counts()
        .await?;

    Ok(Json(
        counted
            .into_iter()
            .map(|(model, count)| AdminCategory::from_counted(model, count))
            .collect(),
    ))
}

/// Admin endpoint creating a category
#[utoipa::path(
    post,
    path = "/admin/categories",
    request_body = CreateCategoryBody,
    responses(
        (status = 201, description = "Category created", body = AdminCategory),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError)
    ),
    tag = "admin-categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: AdminSession,
    Json(body): Json<CreateCategoryBody>,
) -> Result<(StatusCode, Json<AdminCategory>), ApiError> {
    let created = CategoryRepository::new(&state.db)
        .create(CreateCategoryRequest {
            name: body.name,
            image_url: body.image_url,
            display_order: body.display_order,
        })
        .await?;

    tracing::info!(admin = %session.username, category = %created.name, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(AdminCategory::from_counted(created, 0)),
    ))
}

/// Admin endpoint updating a category
#[utoipa::path(
    put,
    path = "/admin/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    request_body = UpdateCategoryBody,
    responses(
        (status = 200, description = "Category updated", body = AdminCategory),
        (status = 400, description = "Validation error", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "Category not found", body = ApiError)
    ),
    tag = "admin-categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdateCategoryBody>,
) -> Result<Json<AdminCategory>, ApiError> {
    let repo = CategoryRepository::new(&state.db);
    let updated = repo
        .update(
            id,
            UpdateCategoryRequest {
                name: body.name,
                image_url: body.image_url,
                display_order: body.display_order,
            },
        )
        .await?;

    tracing::info!(admin = %session.username, category_id = id, "Category updated");

    let count = repo
        .list_with_product_counts()
        .await?
        .into_iter()
        .find(|(model, _)| model.id == id)
        .map(|(_, count)| count)
        .unwrap_or(0);

    Ok(Json(AdminCategory::from_counted(updated, count)))
}

/// Admin endpoint deleting a category.
///
/// Refused with 409 while products are still linked to it.
#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "Category not found", body = ApiError),
        (status = 409, description = "Products still linked", body = ApiError)
    ),
    tag = "admin-categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    CategoryRepository::new(&state.db).delete(id).await?;

    tracing::info!(admin = %session.username, category_id = id, "Category deleted");

    Ok(Json(serde_json::json!({ "success": true })))
}
