pub mod cache_service;
pub mod hashing;
pub mod tagging;
pub mod tagging_client;
