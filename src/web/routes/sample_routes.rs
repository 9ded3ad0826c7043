use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::db::services::sample_service;
use crate::services::tagging::{self, RankedTag, RawTag};
use crate::web::models::{AnalyzeParams, SampleAnalysisResponse, SeedResponse};
use crate::web::{AppError, AppState};

const SAMPLE_LIST_CACHE_KEY: &str = "sample_images_list";
const SAMPLE_LIST_TTL: Duration = Duration::from_secs(3600);
// Sample data never changes, so analyses can sit in the cache much longer.
const SAMPLE_ANALYSIS_TTL: Duration = Duration::from_secs(86_400);

// --- Route Handlers ---

async fn list_samples_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    if let Some(cached) = app_state.cache.get(SAMPLE_LIST_CACHE_KEY) {
        return Ok(Json(cached));
    }

    let samples = sample_service::list_active_samples(&app_state.db_pool).await?;
    let summaries: Vec<_> = samples
        .iter()
        .map(|sample| sample_service::sample_summary(sample, &app_state.config.public_base_url))
        .collect();

    let value = serde_json::to_value(&summaries)?;
    app_state
        .cache
        .set(SAMPLE_LIST_CACHE_KEY, value.clone(), SAMPLE_LIST_TTL);
    Ok(Json(value))
}

/// Runs the stored raw tags of a sample through the same normalization pass
/// as a live upload. Each distinct threshold gets its own cache entry.
async fn analyze_sample_handler(
    State(app_state): State<Arc<AppState>>,
    Path(sample_id): Path<i32>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = format!(
        "sample_analysis_{}_{}",
        sample_id, params.confidence_threshold
    );
    if let Some(cached) = app_state.cache.get(&cache_key) {
        return Ok(Json(cached));
    }

    let sample = sample_service::get_sample(&app_state.db_pool, sample_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Sample image not found".to_string()))?;

    let raw_tags: Vec<RawTag> = serde_json::from_str(&sample.tags_json)?;
    let optimal_tags = tagging::normalize_tags(&raw_tags, params.confidence_threshold)?;
    let primary_tags: Vec<RankedTag> =
        optimal_tags.iter().filter(|t| t.is_primary).cloned().collect();

    let response = SampleAnalysisResponse {
        image_id: format!("sample_{}", sample.id),
        filename: sample.filename,
        total_tags: optimal_tags.len(),
        tags: optimal_tags,
        primary_tags,
        is_sample: true,
    };

    let value = serde_json::to_value(&response)?;
    app_state
        .cache
        .set(&cache_key, value.clone(), SAMPLE_ANALYSIS_TTL);
    Ok(Json(value))
}

async fn load_samples_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<SeedResponse>, AppError> {
    let inserted = sample_service::load_samples(&app_state.db_pool).await?;
    Ok(Json(SeedResponse { inserted }))
}

// --- Router ---

pub fn create_sample_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_samples_handler))
        .route("/{sample_id}/analyze", post(analyze_sample_handler))
        .route("/load", post(load_samples_handler))
}
