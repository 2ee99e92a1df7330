/// Data models for timeline-service
///
/// This module defines structures for:
/// - Post: user-authored timeline entries
/// - Like: a user liking a post (unique per user/post pair)
/// - Comment: comments on posts
/// - PostDetail: a post hydrated with author identity, likes, and comments,
///   as served by the recent-posts listing
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity as stored
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Like entity - represents a user liking a post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Comment entity - represents a comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Flat row produced by the posts-with-author join
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostWithAuthor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author identity attached to a listed post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: Uuid,
    pub username: String,
}

/// A post as served by the recent-posts listing: author identity plus the
/// post's likes and comments. Serializable both ways so cached entries can be
/// returned verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: Uuid,
    pub author: PostAuthor,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
}

impl PostDetail {
    pub fn from_parts(post: PostWithAuthor, likes: Vec<Like>, comments: Vec<Comment>) -> Self {
        Self {
            id: post.id,
            author: PostAuthor {
                id: post.user_id,
                username: post.username,
            },
            content: post.content,
            created_at: post.created_at,
            likes,
            comments,
        }
    }
}
