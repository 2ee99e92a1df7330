/// Database access layer
///
/// This module provides:
/// - Database connection pooling
/// - Repository functions for posts, likes, comments
pub mod comment_repo;
pub mod like_repo;
pub mod post_repo;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create the PostgreSQL connection pool.
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
