//! SeaORM entities mapping to the relational schema.

pub mod image;
pub mod image_tag;
pub mod sample_image;

// Prelude module for easy importing of all entities and their related types
pub mod prelude {
    pub use super::image::ActiveModel as ImageActiveModel;
    pub use super::image::Column as ImageColumn;
    pub use super::image::Entity as Image;
    pub use super::image::Model as ImageModel;

    pub use super::image_tag::ActiveModel as ImageTagActiveModel;
    pub use super::image_tag::Column as ImageTagColumn;
    pub use super::image_tag::Entity as ImageTag;
    pub use super::image_tag::Model as ImageTagModel;

    pub use super::sample_image::ActiveModel as SampleImageActiveModel;
    pub use super::sample_image::Column as SampleImageColumn;
    pub use super::sample_image::Entity as SampleImage;
    pub use super::sample_image::Model as SampleImageModel;
}
