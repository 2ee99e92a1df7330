/// Timeline Service Library
///
/// Handles the recent-posts timeline and per-post engagement (likes,
/// comments) for a social platform.
///
/// # Modules
///
/// - `handlers`: Timeline HTTP request handlers
/// - `models`: Data structures for posts, likes, comments
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `cache`: Recent-posts caching and invalidation
/// - `middleware`: HTTP middleware for authentication
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
