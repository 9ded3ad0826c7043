use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entries below this confidence are dropped unless the caller overrides it.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 30.0;

/// A tag is primary when its confidence strictly exceeds this cutoff.
pub const PRIMARY_CONFIDENCE_CUTOFF: f64 = 60.0;

/// A single candidate from the tagging gateway: labels keyed by language
/// code plus a 0-100 confidence score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTag {
    pub tag: HashMap<String, String>,
    #[serde(default)]
    pub confidence: f64,
}

/// A filtered and classified tag, ready for persistence or response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTag {
    pub tag_name: String,
    pub confidence: f64,
    pub is_primary: bool,
}

#[derive(Error, Debug)]
pub enum TagError {
    #[error("tag entry has no English label")]
    MissingEnglishLabel,
}

/// Filters, classifies and ranks raw gateway tags. Entries with confidence
/// strictly below the threshold are dropped; survivors carry the English
/// label and are flagged primary when confidence > 60.0 (a tag at exactly
/// 60.0 is not primary). The result is sorted by confidence descending;
/// the sort is stable, so input order is preserved on ties.
///
/// Shared by the live upload pipeline and the sample-analysis path.
pub fn normalize_tags(
    raw_tags: &[RawTag],
    confidence_threshold: f64,
) -> Result<Vec<RankedTag>, TagError> {
    let mut ranked = Vec::new();

    for raw in raw_tags {
        if raw.confidence < confidence_threshold {
            continue;
        }
        let label = raw.tag.get("en").ok_or(TagError::MissingEnglishLabel)?;
        ranked.push(RankedTag {
            tag_name: label.clone(),
            confidence: raw.confidence,
            is_primary: raw.confidence > PRIMARY_CONFIDENCE_CUTOFF,
        });
    }

    ranked.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(ranked)
}
