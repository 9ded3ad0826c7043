use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::entities::image_tag;
use crate::services::tagging::{DEFAULT_CONFIDENCE_THRESHOLD, RankedTag};

fn default_confidence_threshold() -> f64 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

fn default_language() -> String {
    "en".to_string()
}

fn default_top_tags_limit() -> u64 {
    5
}

// --- Request Structs ---

#[derive(Debug, Deserialize)]
pub struct UploadParams {
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct TopTagsParams {
    #[serde(default = "default_top_tags_limit")]
    pub limit: u64,
    #[serde(default = "default_confidence_threshold")]
    pub min_confidence: f64,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

// --- Response Structs ---

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub image_id: i32,
    pub filename: String,
    pub total_tags: usize,
    pub tags: Vec<RankedTag>,
    pub primary_tags: Vec<RankedTag>,
}

#[derive(Debug, Serialize)]
pub struct TagSummary {
    pub name: String,
    pub confidence: f64,
    pub is_primary: bool,
}

impl From<&image_tag::Model> for TagSummary {
    fn from(tag: &image_tag::Model) -> Self {
        TagSummary {
            name: tag.tag_name.clone(),
            confidence: tag.confidence,
            is_primary: tag.is_primary,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageSummary {
    pub id: i32,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    pub total_tags: usize,
    pub tags: Vec<TagSummary>,
}

#[derive(Debug, Serialize)]
pub struct ImageListResponse {
    pub images: Vec<ImageSummary>,
}

#[derive(Debug, Serialize)]
pub struct ImageDetail {
    pub id: i32,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    pub file_size: i64,
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
pub struct ImageDetailResponse {
    pub image: ImageDetail,
    pub tags: Vec<TagSummary>,
}

/// Shaped like a live upload response, but for a pre-seeded sample; the id
/// is symbolic and the payload is flagged accordingly.
#[derive(Debug, Serialize)]
pub struct SampleAnalysisResponse {
    pub image_id: String,
    pub filename: String,
    pub total_tags: usize,
    pub tags: Vec<RankedTag>,
    pub primary_tags: Vec<RankedTag>,
    pub is_sample: bool,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub inserted: u64,
}
