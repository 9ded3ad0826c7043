use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A pre-seeded catalog entry with pre-computed raw tags, used for demo
/// analyses without calling the live tagging gateway.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sample_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub filename: String,
    pub image_url: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub tags_json: String,
    pub upload_date: ChronoDateTimeUtc,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
