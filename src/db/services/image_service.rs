use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::db::entities::{image, image_tag};
use crate::services::tagging::RankedTag;

// --- Image Service Functions ---

/// Point lookup backing duplicate detection: true iff an image with this
/// exact content fingerprint has been stored before. Bit-for-bit identical
/// content only, not a similarity search.
pub async fn is_duplicate(db: &DatabaseConnection, image_hash: &str) -> Result<bool, DbErr> {
    let existing = image::Entity::find()
        .filter(image::Column::ImageHash.eq(image_hash))
        .one(db)
        .await?;
    Ok(existing.is_some())
}

pub struct NewImage<'a> {
    pub filename: &'a str,
    pub file_size: i64,
    pub mime_type: &'a str,
    pub image_hash: &'a str,
    pub language: &'a str,
}

/// Persists an image and its ranked tags as one unit of work: either the
/// image row and every tag row land, or nothing does.
pub async fn insert_image_with_tags(
    db: &DatabaseConnection,
    new_image: NewImage<'_>,
    tags: &[RankedTag],
) -> Result<image::Model, DbErr> {
    let now = Utc::now();
    let txn = db.begin().await?;

    let stored = image::ActiveModel {
        filename: Set(new_image.filename.to_owned()),
        original_filename: Set(new_image.filename.to_owned()),
        file_size: Set(new_image.file_size),
        mime_type: Set(new_image.mime_type.to_owned()),
        image_hash: Set(new_image.image_hash.to_owned()),
        upload_date: Set(now),
        processed_date: Set(Some(now)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if !tags.is_empty() {
        let tag_models = tags.iter().map(|tag| image_tag::ActiveModel {
            image_id: Set(stored.id),
            tag_name: Set(tag.tag_name.clone()),
            confidence: Set(tag.confidence),
            language: Set(new_image.language.to_owned()),
            is_primary: Set(tag.is_primary),
            ..Default::default()
        });
        image_tag::Entity::insert_many(tag_models).exec(&txn).await?;
    }

    txn.commit().await?;
    Ok(stored)
}

/// All stored images with their tags, tags in insertion order.
pub async fn list_images_with_tags(
    db: &DatabaseConnection,
) -> Result<Vec<(image::Model, Vec<image_tag::Model>)>, DbErr> {
    image::Entity::find()
        .find_with_related(image_tag::Entity)
        .order_by_asc(image_tag::Column::Id)
        .all(db)
        .await
}

pub async fn get_image_with_tags(
    db: &DatabaseConnection,
    image_id: i32,
) -> Result<Option<(image::Model, Vec<image_tag::Model>)>, DbErr> {
    let Some(img) = image::Entity::find_by_id(image_id).one(db).await? else {
        return Ok(None);
    };
    let tags = img
        .find_related(image_tag::Entity)
        .order_by_asc(image_tag::Column::Id)
        .all(db)
        .await?;
    Ok(Some((img, tags)))
}

/// Detects the store rejecting a duplicate insert. Two concurrent uploads of
/// identical bytes can both pass the duplicate pre-check; the unique
/// constraint on images.image_hash decides the loser, and that rejection is
/// surfaced as the same conflict the pre-check produces.
pub fn is_unique_violation(err: &DbErr) -> bool {
    let runtime_err = match err {
        DbErr::Query(e) | DbErr::Exec(e) => e,
        _ => return false,
    };
    if let sea_orm::RuntimeErr::SqlxError(sqlx::Error::Database(database_error)) = runtime_err {
        return database_error.is_unique_violation();
    }
    false
}
