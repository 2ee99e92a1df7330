/// Like handlers - HTTP endpoint for toggling likes
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::LikeService;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct LikeToggleResponse {
    pub liked: bool,
}

/// Toggle the acting user's like on a post
pub async fn toggle_like(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let liked = service.toggle(*post_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(LikeToggleResponse { liked }))
}
