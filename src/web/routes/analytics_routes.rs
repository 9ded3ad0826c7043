use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use std::sync::Arc;

use crate::db::services::analytics_service::{self, OverallStats, TopTagsReport};
use crate::web::models::TopTagsParams;
use crate::web::{AppError, AppState};

// --- Route Handlers ---

async fn top_tags_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<TopTagsParams>,
) -> Result<Json<TopTagsReport>, AppError> {
    let report =
        analytics_service::top_tags(&app_state.db_pool, params.min_confidence, params.limit)
            .await?;
    Ok(Json(report))
}

async fn stats_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<OverallStats>, AppError> {
    let stats = analytics_service::overall_stats(&app_state.db_pool).await?;
    Ok(Json(stats))
}

// --- Router ---

pub fn create_analytics_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/top-tags/", get(top_tags_handler))
        .route("/stats/", get(stats_handler))
}
