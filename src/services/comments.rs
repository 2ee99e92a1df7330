/// Comment service - creation and listing
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Comment;
use crate::services::posts::validate_content;
use sqlx::PgPool;
use uuid::Uuid;

/// Upper bound on comment content length, in characters.
pub const MAX_COMMENT_CONTENT_CHARS: usize = 2_000;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a comment on an existing post
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        let content = validate_content(content, MAX_COMMENT_CONTENT_CHARS)?;

        if post_repo::find_post_by_id(&self.pool, post_id).await?.is_none() {
            return Err(AppError::NotFound(format!("post {} does not exist", post_id)));
        }

        let comment = comment_repo::create_comment(&self.pool, post_id, user_id, content).await?;

        Ok(comment)
    }

    /// Get comments for a post, newest first
    pub async fn get_post_comments(
        &self,
        post_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>> {
        let comments = comment_repo::get_comments_by_post(&self.pool, post_id, limit, offset).await?;

        Ok(comments)
    }
}
