use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};

use crate::db::entities::{image, image_tag};

// --- Analytics Service Functions ---

/// One row of the per-tag aggregate.
#[derive(FromQueryResult, Debug)]
struct TagAggregateRow {
    tag_name: String,
    occurrence_count: i64,
    avg_confidence: Option<f64>,
    image_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTagEntry {
    pub tag_name: String,
    pub occurrence_count: i64,
    pub image_count: i64,
    pub percentage_on_images: f64,
    pub avg_confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTagsReport {
    pub total_images: u64,
    pub total_tags: u64,
    pub avg_tags_per_image: f64,
    pub min_confidence: f64,
    pub top_tags: Vec<TopTagEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagFrequency {
    pub name: Option<String>,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagConfidence {
    pub name: Option<String>,
    pub avg_confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallStats {
    pub total_images: u64,
    pub total_tags: u64,
    pub avg_tags_per_image: f64,
    pub most_common_tag: TagFrequency,
    pub highest_confidence_tag: TagConfidence,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn occurrence_count_expr() -> SimpleExpr {
    Func::count(Expr::col(image_tag::Column::Id)).into()
}

fn avg_confidence_expr() -> SimpleExpr {
    Func::avg(Expr::col(image_tag::Column::Confidence)).into()
}

/// Groups tags by name, restricted to confidence >= min_confidence, ordered
/// by occurrence count descending, top `limit` groups. Ties among equally
/// frequent tags resolve to whichever row the store returns first.
pub async fn top_tags(
    db: &DatabaseConnection,
    min_confidence: f64,
    limit: u64,
) -> Result<TopTagsReport, DbErr> {
    let total_images = image::Entity::find().count(db).await?;
    let total_tags = image_tag::Entity::find().count(db).await?;
    let avg_tags_per_image = if total_images > 0 {
        total_tags as f64 / total_images as f64
    } else {
        0.0
    };

    let rows: Vec<TagAggregateRow> = image_tag::Entity::find()
        .select_only()
        .column(image_tag::Column::TagName)
        .column_as(occurrence_count_expr(), "occurrence_count")
        .column_as(avg_confidence_expr(), "avg_confidence")
        .column_as(
            SimpleExpr::from(Func::count_distinct(Expr::col(image_tag::Column::ImageId))),
            "image_count",
        )
        .filter(image_tag::Column::Confidence.gte(min_confidence))
        .group_by(image_tag::Column::TagName)
        .order_by(occurrence_count_expr(), Order::Desc)
        .limit(limit)
        .into_model::<TagAggregateRow>()
        .all(db)
        .await?;

    let top_tags = rows
        .into_iter()
        .map(|row| {
            let percentage = if total_images > 0 {
                row.image_count as f64 / total_images as f64 * 100.0
            } else {
                0.0
            };
            TopTagEntry {
                tag_name: row.tag_name,
                occurrence_count: row.occurrence_count,
                image_count: row.image_count,
                percentage_on_images: round2(percentage),
                avg_confidence: round2(row.avg_confidence.unwrap_or(0.0)),
            }
        })
        .collect();

    Ok(TopTagsReport {
        total_images,
        total_tags,
        avg_tags_per_image: round2(avg_tags_per_image),
        min_confidence,
        top_tags,
    })
}

/// Corpus-wide totals plus the most frequent tag and the tag with the
/// highest average confidence.
pub async fn overall_stats(db: &DatabaseConnection) -> Result<OverallStats, DbErr> {
    let total_images = image::Entity::find().count(db).await?;
    let total_tags = image_tag::Entity::find().count(db).await?;
    let avg_tags_per_image = if total_images > 0 {
        total_tags as f64 / total_images as f64
    } else {
        0.0
    };

    #[derive(FromQueryResult)]
    struct NameCountRow {
        tag_name: String,
        occurrence_count: i64,
    }

    let most_common: Option<NameCountRow> = image_tag::Entity::find()
        .select_only()
        .column(image_tag::Column::TagName)
        .column_as(occurrence_count_expr(), "occurrence_count")
        .group_by(image_tag::Column::TagName)
        .order_by(occurrence_count_expr(), Order::Desc)
        .into_model::<NameCountRow>()
        .one(db)
        .await?;

    #[derive(FromQueryResult)]
    struct NameAvgRow {
        tag_name: String,
        avg_confidence: Option<f64>,
    }

    let highest_confidence: Option<NameAvgRow> = image_tag::Entity::find()
        .select_only()
        .column(image_tag::Column::TagName)
        .column_as(avg_confidence_expr(), "avg_confidence")
        .group_by(image_tag::Column::TagName)
        .order_by(avg_confidence_expr(), Order::Desc)
        .into_model::<NameAvgRow>()
        .one(db)
        .await?;

    Ok(OverallStats {
        total_images,
        total_tags,
        avg_tags_per_image: round2(avg_tags_per_image),
        most_common_tag: match most_common {
            Some(row) => TagFrequency {
                name: Some(row.tag_name),
                count: row.occurrence_count,
            },
            None => TagFrequency {
                name: None,
                count: 0,
            },
        },
        highest_confidence_tag: match highest_confidence {
            Some(row) => TagConfidence {
                name: Some(row.tag_name),
                avg_confidence: round2(row.avg_confidence.unwrap_or(0.0)),
            },
            None => TagConfidence {
                name: None,
                avg_confidence: 0.0,
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::services::image_service::{NewImage, insert_image_with_tags};
    use crate::services::tagging::RankedTag;
    use sea_orm::{ConnectOptions, Database};

    async fn setup_db() -> DatabaseConnection {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.unwrap();
        crate::db::sync_schema(&db).await.unwrap();
        db
    }

    fn ranked(name: &str, confidence: f64) -> RankedTag {
        RankedTag {
            tag_name: name.to_string(),
            confidence,
            is_primary: confidence > 60.0,
        }
    }

    async fn store(db: &DatabaseConnection, filename: &str, hash: &str, tags: &[RankedTag]) {
        insert_image_with_tags(
            db,
            NewImage {
                filename,
                file_size: 1024,
                mime_type: "image/jpeg",
                image_hash: hash,
                language: "en",
            },
            tags,
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_percentage_on_images() {
        let db = setup_db().await;
        // "cat" appears on 3 of 10 images.
        for i in 0..10 {
            let filename = format!("img{i}.jpg");
            let hash = format!("hash{i}");
            let tags = if i < 3 {
                vec![ranked("cat", 70.0 + i as f64 * 10.0)]
            } else {
                vec![ranked(&format!("filler{i}"), 50.0)]
            };
            store(&db, &filename, &hash, &tags).await;
        }

        let report = top_tags(&db, 30.0, 5).await.unwrap();

        assert_eq!(report.total_images, 10);
        assert_eq!(report.total_tags, 10);
        assert_eq!(report.avg_tags_per_image, 1.0);
        let cat = &report.top_tags[0];
        assert_eq!(cat.tag_name, "cat");
        assert_eq!(cat.occurrence_count, 3);
        assert_eq!(cat.image_count, 3);
        assert_eq!(cat.percentage_on_images, 30.0);
        assert_eq!(cat.avg_confidence, 80.0);
    }

    #[tokio::test]
    async fn test_min_confidence_filters_groups() {
        let db = setup_db().await;
        store(
            &db,
            "a.jpg",
            "hash_a",
            &[ranked("strong", 50.0), ranked("weak", 20.0)],
        )
        .await;

        let report = top_tags(&db, 30.0, 5).await.unwrap();

        assert_eq!(report.top_tags.len(), 1);
        assert_eq!(report.top_tags[0].tag_name, "strong");
    }

    #[tokio::test]
    async fn test_limit_bounds_the_group_count() {
        let db = setup_db().await;
        store(&db, "a.jpg", "hash_a", &[ranked("one", 50.0)]).await;
        store(&db, "b.jpg", "hash_b", &[ranked("two", 50.0)]).await;
        store(&db, "c.jpg", "hash_c", &[ranked("three", 50.0)]).await;

        let report = top_tags(&db, 30.0, 2).await.unwrap();
        assert_eq!(report.top_tags.len(), 2);
    }

    #[tokio::test]
    async fn test_ordering_is_by_occurrence_count() {
        let db = setup_db().await;
        store(&db, "a.jpg", "hash_a", &[ranked("common", 40.0), ranked("rare", 95.0)]).await;
        store(&db, "b.jpg", "hash_b", &[ranked("common", 60.0)]).await;

        let report = top_tags(&db, 30.0, 5).await.unwrap();

        assert_eq!(report.top_tags[0].tag_name, "common");
        assert_eq!(report.top_tags[0].occurrence_count, 2);
        assert_eq!(report.top_tags[1].tag_name, "rare");
    }

    #[tokio::test]
    async fn test_overall_stats() {
        let db = setup_db().await;
        store(&db, "a.jpg", "hash_a", &[ranked("cat", 80.0), ranked("dog", 95.0)]).await;
        store(&db, "b.jpg", "hash_b", &[ranked("cat", 70.0)]).await;
        store(&db, "c.jpg", "hash_c", &[ranked("cat", 60.0)]).await;

        let stats = overall_stats(&db).await.unwrap();

        assert_eq!(stats.total_images, 3);
        assert_eq!(stats.total_tags, 4);
        assert_eq!(stats.avg_tags_per_image, 1.33);
        assert_eq!(stats.most_common_tag.name.as_deref(), Some("cat"));
        assert_eq!(stats.most_common_tag.count, 3);
        assert_eq!(stats.highest_confidence_tag.name.as_deref(), Some("dog"));
        assert_eq!(stats.highest_confidence_tag.avg_confidence, 95.0);
    }

    #[tokio::test]
    async fn test_empty_corpus() {
        let db = setup_db().await;

        let report = top_tags(&db, 30.0, 5).await.unwrap();
        assert_eq!(report.total_images, 0);
        assert_eq!(report.total_tags, 0);
        assert_eq!(report.avg_tags_per_image, 0.0);
        assert!(report.top_tags.is_empty());

        let stats = overall_stats(&db).await.unwrap();
        assert_eq!(stats.total_images, 0);
        assert!(stats.most_common_tag.name.is_none());
        assert_eq!(stats.most_common_tag.count, 0);
        assert!(stats.highest_confidence_tag.name.is_none());
        assert_eq!(stats.highest_confidence_tag.avg_confidence, 0.0);
    }
}
