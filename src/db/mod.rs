pub mod entities;
pub mod sample_data;
pub mod services;

use sea_orm::sea_query::Index;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityName, Schema};

/// Synchronizes the schema with the entity definitions on startup. Tables
/// and indexes are created if missing; existing data is left untouched.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut images = schema.create_table_from_entity(entities::image::Entity);
    images.if_not_exists();
    db.execute(backend.build(&images)).await?;

    let mut image_tags = schema.create_table_from_entity(entities::image_tag::Entity);
    image_tags.if_not_exists();
    db.execute(backend.build(&image_tags)).await?;

    let mut sample_images = schema.create_table_from_entity(entities::sample_image::Entity);
    sample_images.if_not_exists();
    db.execute(backend.build(&sample_images)).await?;

    // No duplicate tag names on the same image.
    let uq_image_tag = Index::create()
        .name("uq_image_tags_image_id_tag_name")
        .table(entities::image_tag::Entity.table_ref())
        .col(entities::image_tag::Column::ImageId)
        .col(entities::image_tag::Column::TagName)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(backend.build(&uq_image_tag)).await?;

    Ok(())
}
