use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::db::entities::sample_image;
use crate::db::sample_data::SAMPLE_IMAGES;

// --- Sample Image Service Functions ---

/// Listing shape for the cached catalog summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSummary {
    pub id: i32,
    pub filename: String,
    pub image_url: String,
    pub description: Option<String>,
    pub tags_count: usize,
}

pub async fn list_active_samples(
    db: &DatabaseConnection,
) -> Result<Vec<sample_image::Model>, DbErr> {
    sample_image::Entity::find()
        .filter(sample_image::Column::IsActive.eq(true))
        .order_by_asc(sample_image::Column::Id)
        .all(db)
        .await
}

pub async fn get_sample(
    db: &DatabaseConnection,
    sample_id: i32,
) -> Result<Option<sample_image::Model>, DbErr> {
    sample_image::Entity::find_by_id(sample_id).one(db).await
}

/// Loads the built-in sample catalog, skipping entries whose filename is
/// already present. Safe to call repeatedly; returns how many rows were
/// actually inserted.
pub async fn load_samples(db: &DatabaseConnection) -> Result<u64, DbErr> {
    let mut inserted = 0;
    for seed in SAMPLE_IMAGES {
        let exists = sample_image::Entity::find()
            .filter(sample_image::Column::Filename.eq(seed.filename))
            .one(db)
            .await?
            .is_some();
        if exists {
            continue;
        }
        sample_image::ActiveModel {
            filename: Set(seed.filename.to_owned()),
            image_url: Set(seed.image_url.to_owned()),
            description: Set(Some(seed.description.to_owned())),
            tags_json: Set(seed.tags_json.to_owned()),
            upload_date: Set(Utc::now()),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Shapes a sample row for the cached listing. Relative image paths are
/// resolved against the public base URL; the tag count comes from the
/// stored raw-tag blob.
pub fn sample_summary(sample: &sample_image::Model, public_base_url: &str) -> SampleSummary {
    let image_url = if sample.image_url.starts_with("http") {
        sample.image_url.clone()
    } else {
        format!("{}{}", public_base_url, sample.image_url)
    };
    let tags_count = serde_json::from_str::<Vec<serde_json::Value>>(&sample.tags_json)
        .map(|tags| tags.len())
        .unwrap_or(0);

    SampleSummary {
        id: sample.id,
        filename: sample.filename.clone(),
        image_url,
        description: sample.description.clone(),
        tags_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, Database, PaginatorTrait};

    async fn setup_db() -> DatabaseConnection {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.unwrap();
        crate::db::sync_schema(&db).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let db = setup_db().await;

        let first = load_samples(&db).await.unwrap();
        let second = load_samples(&db).await.unwrap();

        assert_eq!(first, SAMPLE_IMAGES.len() as u64);
        assert_eq!(second, 0);
        let total = sample_image::Entity::find().count(&db).await.unwrap();
        assert_eq!(total, SAMPLE_IMAGES.len() as u64);
    }

    #[tokio::test]
    async fn test_listing_returns_active_samples_in_id_order() {
        let db = setup_db().await;
        load_samples(&db).await.unwrap();

        let samples = list_active_samples(&db).await.unwrap();

        assert_eq!(samples.len(), SAMPLE_IMAGES.len());
        for pair in samples.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
        assert!(samples.iter().all(|s| s.is_active));
    }

    #[tokio::test]
    async fn test_unknown_sample_is_none() {
        let db = setup_db().await;
        assert!(get_sample(&db, 42).await.unwrap().is_none());
    }

    #[test]
    fn test_summary_resolves_relative_urls() {
        let sample = sample_image::Model {
            id: 1,
            filename: "mountain_lake.jpg".to_string(),
            image_url: "/static/samples/mountain_lake.jpg".to_string(),
            description: Some("Alpine lake".to_string()),
            tags_json: r#"[{"tag": {"en": "mountain"}, "confidence": 87.3}]"#.to_string(),
            upload_date: Utc::now(),
            is_active: true,
        };

        let summary = sample_summary(&sample, "http://localhost:8000");

        assert_eq!(
            summary.image_url,
            "http://localhost:8000/static/samples/mountain_lake.jpg"
        );
        assert_eq!(summary.tags_count, 1);
    }

    #[test]
    fn test_summary_keeps_absolute_urls() {
        let sample = sample_image::Model {
            id: 2,
            filename: "city.jpg".to_string(),
            image_url: "https://cdn.example.com/city.jpg".to_string(),
            description: None,
            tags_json: "[]".to_string(),
            upload_date: Utc::now(),
            is_active: true,
        };

        let summary = sample_summary(&sample, "http://localhost:8000");

        assert_eq!(summary.image_url, "https://cdn.example.com/city.jpg");
        assert_eq!(summary.tags_count, 0);
    }
}
