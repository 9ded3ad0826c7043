use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::Method,
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::server::config::ServerConfig;
use crate::services::cache_service::CacheService;
use crate::services::tagging_client::TaggingClient;

pub mod error;
pub mod models;
pub mod routes;

pub use error::AppError;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DatabaseConnection,
    pub cache: Arc<CacheService>,
    pub tagging_client: Arc<TaggingClient>,
    pub config: Arc<ServerConfig>,
}

async fn health_check_handler() -> &'static str {
    "OK"
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Image Tagging API",
        "endpoints": {
            "upload_image": "POST /image/upload",
            "list_images": "GET /image/images/",
            "get_image": "GET /image/images/{image_id}",
            "top_tags_analytics": "GET /analytics/top-tags/",
            "overall_stats": "GET /analytics/stats/",
            "sample_images": "GET /sample-images/",
        },
    }))
}

pub fn create_axum_router(
    db_pool: DatabaseConnection,
    cache: Arc<CacheService>,
    tagging_client: Arc<TaggingClient>,
    config: Arc<ServerConfig>,
) -> Router {
    let app_state = Arc::new(AppState {
        db_pool,
        cache,
        tagging_client,
        config,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_check_handler))
        .nest("/image", routes::image_routes::create_image_router())
        .nest(
            "/analytics",
            routes::analytics_routes::create_analytics_router(),
        )
        .nest(
            "/sample-images",
            routes::sample_routes::create_sample_router(),
        )
        .nest_service("/static", ServeDir::new("static"))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(app_state)
        .layer(cors)
}
