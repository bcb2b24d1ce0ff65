//! # Order Inquiry Handlers
//!
//! This module contains the public order inquiry submission and the admin
//! order management endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::AdminSession;
use crate::error::{ApiError, validation_error};
use crate::models::order_inquiry::OrderStatus;
use crate::repositories::OrderInquiryRepository;
use crate::repositories::order_inquiry::{InquiryDetail, SubmitInquiryRequest};
use crate::server::AppState;

/// Request body for the public order inquiry form.
///
/// Every field is optional at the wire level so a missing required field
/// surfaces as a 400 validation error rather than a deserialization
/// failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct InquiryBody {
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub address: Option<String>,
    /// Product name as typed by the customer
    pub product_name: Option<String>,
    pub quantity: Option<String>,
    pub notes: Option<String>,
}

/// Correlation id returned for a stored lead
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: i32,
}

/// Product reference embedded in admin order views
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderProductRef {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
}

/// Order inquiry as shown in the admin panel
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderView {
    pub id: i32,
    pub customer_name: String,
    pub phone: String,
    pub quantity: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
    pub address: String,
    pub notes: String,
    pub status: OrderStatus,
    pub product: Option<OrderProductRef>,
    pub created_at: chrono::DateTime<chrono::FixedOffset>,
}

impl From<InquiryDetail> for OrderView {
    fn from(detail: InquiryDetail) -> Self {
        let product = detail.product.map(|p| OrderProductRef {
            id: p.id,
            name: p.name,
            category: detail.category.map(|c| c.name),
        });

        Self {
            id: detail.inquiry.id,
            customer_name: detail.inquiry.customer_name,
            phone: detail.inquiry.phone,
            quantity: detail.inquiry.quantity,
            district: detail.inquiry.district,
            state: detail.inquiry.state,
            pincode: detail.inquiry.pincode,
            address: detail.inquiry.address,
            notes: detail.inquiry.notes,
            status: detail.inquiry.status,
            product,
            created_at: detail.inquiry.created_at,
        }
    }
}

/// Request body for updating an order's lifecycle status
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusBody {
    /// One of PENDING, CONTACTED, COMPLETED, CANCELLED
    pub status: String,
}

/// Public endpoint submitting an order inquiry
#[utoipa::path(
    post,
    path = "/inquire",
    request_body = InquiryBody,
    responses(
        (status = 201, description = "Inquiry stored", body = SubmitResponse),
        (status = 400, description = "Validation error", body = ApiError)
    ),
    tag = "leads"
)]
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(body): Json<InquiryBody>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let (inquiry, product) = OrderInquiryRepository::new(&state.db)
        .submit(SubmitInquiryRequest {
            customer_name: body.customer_name.unwrap_or_default(),
            phone: body.phone.unwrap_or_default(),
            district: body.district.unwrap_or_default(),
            state: body.state.unwrap_or_default(),
            pincode: body.pincode.unwrap_or_default(),
            address: body.address.unwrap_or_default(),
            product: body.product_name,
            quantity: body.quantity,
            notes: body.notes,
        })
        .await?;

    tracing::info!(
        inquiry_id = inquiry.id,
        product = %product.name,
        "Order inquiry received"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            id: inquiry.id,
        }),
    ))
}

/// Admin endpoint listing order inquiries, newest first
#[utoipa::path(
    get,
    path = "/admin/orders",
    responses(
        (status = 200, description = "All order inquiries", body = [OrderView]),
        (status = 401, description = "Unauthorized", body = ApiError)
    ),
    tag = "admin-orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    _session: AdminSession,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    let orders = OrderInquiryRepository::new(&state.db).list_detailed().await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// Admin endpoint updating an order's status
#[utoipa::path(
    put,
    path = "/admin/orders/{id}",
    params(("id" = i32, Path, description = "Order inquiry id")),
    request_body = UpdateStatusBody,
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Status outside the enum", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "Order not found", body = ApiError)
    ),
    tag = "admin-orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
    Json(body): Json<UpdateStatusBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let status = OrderStatus::parse(&body.status).ok_or_else(|| {
        validation_error(
            "Invalid order status",
            serde_json::json!({ "status": body.status.clone() }),
        )
    })?;

    let updated = OrderInquiryRepository::new(&state.db)
        .update_status(id, status)
        .await?;

    tracing::info!(
        admin = %session.username,
        order_id = id,
        status = %body.status,
        "Order status updated"
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "id": updated.id,
        "status": updated.status,
    })))
}

/// Admin endpoint deleting an order inquiry permanently
#[utoipa::path(
    delete,
    path = "/admin/orders/{id}",
    params(("id" = i32, Path, description = "Order inquiry id")),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "Order not found", body = ApiError)
    ),
    tag = "admin-orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    session: AdminSession,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    OrderInquiryRepository::new(&state.db).delete(id).await?;

    tracing::info!(admin = %session.username, order_id = id, "Order deleted");

    Ok(Json(serde_json::json!({ "success": true })))
}
