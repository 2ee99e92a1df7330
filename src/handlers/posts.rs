/// Post handlers - HTTP endpoints for post operations
use crate::cache::RecentPostsCache;
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

/// List recent posts, served from cache when warm
pub async fn list_posts(
    pool: web::Data<PgPool>,
    cache: web::Data<Arc<RecentPostsCache>>,
) -> Result<HttpResponse> {
    let service = PostService::with_cache((**pool).clone(), cache.get_ref().clone());
    let posts = service.list_recent().await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<PgPool>,
    cache: web::Data<Arc<RecentPostsCache>>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::with_cache((**pool).clone(), cache.get_ref().clone());
    let post = service.create_post(user_id.0, &req.content).await?;

    Ok(HttpResponse::Created().json(post))
}
