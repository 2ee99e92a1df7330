/// Post service - recent listing and creation
use crate::cache::RecentPostsCache;
use crate::db::{comment_repo, like_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, Like, Post, PostDetail};
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Upper bound on the recent-posts listing.
pub const RECENT_POSTS_LIMIT: i64 = 20;

/// Upper bound on post content length, in characters.
pub const MAX_POST_CONTENT_CHARS: usize = 5_000;

pub struct PostService {
    pool: PgPool,
    cache: Option<Arc<RecentPostsCache>>,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool, cache: None }
    }

    pub fn with_cache(pool: PgPool, cache: Arc<RecentPostsCache>) -> Self {
        Self {
            pool,
            cache: Some(cache),
        }
    }

    fn cache(&self) -> Option<&Arc<RecentPostsCache>> {
        self.cache.as_ref()
    }

    /// List the most recent posts, hydrated with author, likes, and comments.
    ///
    /// Serves the cached listing verbatim when warm. On a miss the database
    /// is queried and the result written back with the configured TTL. Cache
    /// failures fall through to the database instead of failing the request.
    pub async fn list_recent(&self) -> Result<Vec<PostDetail>> {
        if let Some(cache) = self.cache() {
            match cache.read().await {
                Ok(Some(posts)) => return Ok(posts),
                Ok(None) => {}
                Err(err) => tracing::warn!("recent posts cache read failed: {}", err),
            }
        }

        let posts = post_repo::find_recent_with_authors(&self.pool, RECENT_POSTS_LIMIT).await?;
        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();

        let mut likes_by_post = group_likes(like_repo::find_likes_batch(&self.pool, &post_ids).await?);
        let mut comments_by_post =
            group_comments(comment_repo::find_comments_batch(&self.pool, &post_ids).await?);

        let details: Vec<PostDetail> = posts
            .into_iter()
            .map(|post| {
                let likes = likes_by_post.remove(&post.id).unwrap_or_default();
                let comments = comments_by_post.remove(&post.id).unwrap_or_default();
                PostDetail::from_parts(post, likes, comments)
            })
            .collect();

        if let Some(cache) = self.cache() {
            if let Err(err) = cache.write(&details).await {
                tracing::warn!("recent posts cache write failed: {}", err);
            }
        }

        Ok(details)
    }

    /// Create a new post and invalidate the recent-posts cache.
    ///
    /// Invalidation runs only after the insert commits; a failed insert
    /// leaves the cache untouched. An invalidation failure is logged, not
    /// surfaced, and the stale entry expires with the TTL.
    pub async fn create_post(&self, user_id: Uuid, content: &str) -> Result<Post> {
        let content = validate_content(content, MAX_POST_CONTENT_CHARS)?;

        let post = post_repo::create_post(&self.pool, user_id, content).await?;

        if let Some(cache) = self.cache() {
            if let Err(err) = cache.invalidate().await {
                tracing::warn!(post_id = %post.id, "recent posts cache invalidation failed: {}", err);
            }
        }

        Ok(post)
    }
}

fn group_likes(likes: Vec<Like>) -> HashMap<Uuid, Vec<Like>> {
    let mut grouped: HashMap<Uuid, Vec<Like>> = HashMap::new();
    for like in likes {
        grouped.entry(like.post_id).or_default().push(like);
    }
    grouped
}

fn group_comments(comments: Vec<Comment>) -> HashMap<Uuid, Vec<Comment>> {
    let mut grouped: HashMap<Uuid, Vec<Comment>> = HashMap::new();
    for comment in comments {
        grouped.entry(comment.post_id).or_default().push(comment);
    }
    grouped
}

/// Reject empty or oversized content. Returns the input on success so
/// callers can bind it directly.
pub(crate) fn validate_content(content: &str, max_chars: usize) -> Result<&str> {
    if content.trim().is_empty() {
        return Err(AppError::ValidationError(
            "content must not be empty".to_string(),
        ));
    }

    if content.chars().count() > max_chars {
        return Err(AppError::ValidationError(format!(
            "content exceeds {} characters",
            max_chars
        )));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_content_rejects_empty() {
        assert!(validate_content("", 100).is_err());
        assert!(validate_content("   \n\t", 100).is_err());
    }

    #[test]
    fn test_validate_content_rejects_oversized() {
        let long = "x".repeat(101);
        assert!(validate_content(&long, 100).is_err());
    }

    #[test]
    fn test_validate_content_accepts_boundary() {
        let exact = "x".repeat(100);
        assert!(validate_content(&exact, 100).is_ok());
        assert!(validate_content("hello", 100).is_ok());
    }
}
