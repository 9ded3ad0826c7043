pub mod analytics_service;
pub mod image_service;
pub mod sample_service;
