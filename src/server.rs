//! # Server Configuration
//!
//! This module contains the server setup and configuration for the
//! Aquafeed API: application state, router assembly, the OpenAPI document,
//! and the startup sequence.

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::session_guard;
use crate::config::AppConfig;
use crate::db;
use crate::handlers;
use crate::image_host::ImageHostClient;
use crate::seeds;
use crate::telemetry::trace_context_middleware;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
    pub image_host: ImageHostClient,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    // Leave headroom over the upload ceiling for multipart framing; the
    // precise limit is enforced by the image host client.
    let body_limit = DefaultBodyLimit::max(state.config.upload_max_bytes + 64 * 1024);

    let admin_routes = Router::new()
        .route(
            "/admin/categories",
            get(handlers::categories::list_categories).post(handlers::categories::create_category),
        )
        .route(
            "/admin/categories/{id}",
            put(handlers::categories::update_category)
                .delete(handlers::categories::delete_category),
        )
        .route(
            "/admin/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/admin/products/{id}",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )
        .route(
            "/admin/pincodes",
            get(handlers::pincodes::list_pincodes).post(handlers::pincodes::create_pincode),
        )
        .route(
            "/admin/pincodes/{id}",
            put(handlers::pincodes::update_pincode).delete(handlers::pincodes::delete_pincode),
        )
        .route("/admin/orders", get(handlers::orders::list_orders))
        .route(
            "/admin/orders/{id}",
            put(handlers::orders::update_order_status).delete(handlers::orders::delete_order),
        )
        .route("/admin/dealers", get(handlers::dealers::list_dealers))
        .route(
            "/admin/dealers/{id}",
            put(handlers::dealers::update_dealer_status),
        )
        .route("/admin/stats", get(handlers::stats::dashboard_stats))
        .route("/admin/upload", post(handlers::upload::upload_image))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.config),
            session_guard,
        ));

    Router::new()
        .route("/", get(handlers::root))
        .route("/categories", get(handlers::categories::list_public_categories))
        .route("/products", get(handlers::products::list_public_products))
        .route("/check-pincode", get(handlers::pincodes::check_pincode))
        .route("/inquire", post(handlers::orders::submit_inquiry))
        .route("/dealer", post(handlers::dealers::submit_dealer))
        .route("/admin/login", post(handlers::auth::login))
        .merge(admin_routes)
        .layer(body_limit)
        .layer(middleware::from_fn(trace_context_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Starts the server with the given configuration.
///
/// Runs pending migrations and the idempotent seed pass before binding.
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let pool = db::init_pool(&config).await?;

    migration::Migrator::up(&pool, None).await?;
    seeds::run(&pool, &config).await?;

    let addr = config.bind_addr()?;
    let state = AppState {
        image_host: ImageHostClient::from_config(&config),
        config: Arc::new(config),
        db: pool,
    };
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build an [`AppState`] for tests without touching the network
pub fn create_test_app_state(config: AppConfig, db: DatabaseConnection) -> AppState {
    AppState {
        image_host: ImageHostClient::from_config(&config),
        config: Arc::new(config),
        db,
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::auth::login,
        crate::handlers::categories::list_public_categories,
        crate::handlers::categories::list_categories,
        crate::handlers::categories::create_category,
        crate::handlers::categories::update_category,
        crate::handlers::categories::delete_category,
        crate::handlers::products::list_public_products,
        crate::handlers::products::list_products,
        crate::handlers::products::create_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,
        crate::handlers::pincodes::check_pincode,
        crate::handlers::pincodes::list_pincodes,
        crate::handlers::pincodes::create_pincode,
        crate::handlers::pincodes::update_pincode,
        crate::handlers::pincodes::delete_pincode,
        crate::handlers::orders::submit_inquiry,
        crate::handlers::orders::list_orders,
        crate::handlers::orders::update_order_status,
        crate::handlers::orders::delete_order,
        crate::handlers::dealers::submit_dealer,
        crate::handlers::dealers::list_dealers,
        crate::handlers::dealers::update_dealer_status,
        crate::handlers::stats::dashboard_stats,
        crate::handlers::upload::upload_image,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::OrderStatus,
            crate::models::DealerStatus,
            crate::models::pincode::Model,
            crate::error::ApiError,
            crate::order_flow::Deliverability,
            crate::image_host::UploadedImage,
            crate::repositories::stats::DashboardStats,
            crate::handlers::auth::LoginRequest,
            crate::handlers::auth::LoginResponse,
            crate::handlers::categories::PublicCategory,
            crate::handlers::categories::AdminCategory,
            crate::handlers::categories::CreateCategoryBody,
            crate::handlers::categories::UpdateCategoryBody,
            crate::handlers::products::CategoryRef,
            crate::handlers::products::PublicProduct,
            crate::handlers::products::AdminProduct,
            crate::handlers::products::CreateProductBody,
            crate::handlers::products::UpdateProductBody,
            crate::handlers::pincodes::CreatePincodeBody,
            crate::handlers::pincodes::UpdatePincodeBody,
            crate::handlers::orders::InquiryBody,
            crate::handlers::orders::SubmitResponse,
            crate::handlers::orders::OrderProductRef,
            crate::handlers::orders::OrderView,
            crate::handlers::orders::UpdateStatusBody,
            crate::handlers::dealers::DealerBody,
            crate::handlers::dealers::DealerSubmitResponse,
            crate::handlers::dealers::DealerView,
            crate::handlers::dealers::UpdateDealerStatusBody,
        )
    ),
    info(
        title = "Aquafeed API",
        description = "Catalog, lead capture, and admin back-office for a fish-feed distributor",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
