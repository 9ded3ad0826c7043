use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    routing::{get, post},
};
use std::sync::Arc;
use tracing::info;

use crate::db::services::image_service::{self, NewImage};
use crate::services::{hashing, tagging};
use crate::web::models::{
    ImageDetail, ImageDetailResponse, ImageListResponse, ImageSummary, TagSummary, UploadParams,
    UploadResponse,
};
use crate::web::{AppError, AppState};

// --- Route Handlers ---

/// The upload pipeline: validate MIME type, fingerprint, duplicate check,
/// tagging gateway call, normalization, atomic persistence. Each step is
/// terminal on failure.
async fn upload_image_handler(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_owned();
        let content_type = field.content_type().unwrap_or_default().to_owned();
        let data = field.bytes().await?;
        upload = Some((filename, content_type, data.to_vec()));
        break;
    }
    let (filename, content_type, image_data) =
        upload.ok_or_else(|| AppError::InvalidInput("Missing file field".to_string()))?;

    if !content_type.starts_with("image/") {
        return Err(AppError::InvalidInput("File must be an image".to_string()));
    }

    let image_hash = hashing::sha256_hex(&image_data);
    if image_service::is_duplicate(&app_state.db_pool, &image_hash).await? {
        return Err(AppError::Conflict(
            "Duplicate image already exists".to_string(),
        ));
    }

    let file_size = image_data.len() as i64;
    let raw_tags = app_state
        .tagging_client
        .tag_image(image_data, &filename, &content_type, &params.language)
        .await?;
    let optimal_tags = tagging::normalize_tags(&raw_tags, params.confidence_threshold)?;

    let stored = image_service::insert_image_with_tags(
        &app_state.db_pool,
        NewImage {
            filename: &filename,
            file_size,
            mime_type: &content_type,
            image_hash: &image_hash,
            language: &params.language,
        },
        &optimal_tags,
    )
    .await
    .map_err(|db_err| {
        // A concurrent upload of identical bytes can slip past the
        // pre-check; the unique constraint rejects the loser here.
        if image_service::is_unique_violation(&db_err) {
            AppError::Conflict("Duplicate image already exists".to_string())
        } else {
            AppError::DatabaseError(db_err.to_string())
        }
    })?;

    info!(
        image_id = stored.id,
        total_tags = optimal_tags.len(),
        "image uploaded and tagged"
    );

    let primary_tags: Vec<_> = optimal_tags.iter().filter(|t| t.is_primary).cloned().collect();
    Ok(Json(UploadResponse {
        image_id: stored.id,
        filename,
        total_tags: optimal_tags.len(),
        tags: optimal_tags,
        primary_tags,
    }))
}

async fn list_images_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<ImageListResponse>, AppError> {
    let rows = image_service::list_images_with_tags(&app_state.db_pool).await?;

    let images = rows
        .into_iter()
        .map(|(img, tags)| ImageSummary {
            id: img.id,
            filename: img.filename,
            upload_date: img.upload_date,
            total_tags: tags.len(),
            tags: tags.iter().map(TagSummary::from).collect(),
        })
        .collect();

    Ok(Json(ImageListResponse { images }))
}

async fn get_image_handler(
    State(app_state): State<Arc<AppState>>,
    Path(image_id): Path<i32>,
) -> Result<Json<ImageDetailResponse>, AppError> {
    let (img, tags) = image_service::get_image_with_tags(&app_state.db_pool, image_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

    Ok(Json(ImageDetailResponse {
        image: ImageDetail {
            id: img.id,
            filename: img.filename,
            upload_date: img.upload_date,
            file_size: img.file_size,
            mime_type: img.mime_type,
        },
        tags: tags.iter().map(TagSummary::from).collect(),
    }))
}

// --- Router ---

pub fn create_image_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload", post(upload_image_handler))
        .route("/images/", get(list_images_handler))
        .route("/images/{image_id}", get(get_image_handler))
}
