use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new comment on a post
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, user_id, content)
        VALUES ($1, $2, $3)
        RETURNING id, post_id, user_id, content, created_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(content)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Get comments for a post, newest first
pub async fn get_comments_by_post(
    pool: &PgPool,
    post_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, user_id, content, created_at
        FROM comments
        WHERE post_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(post_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Get comments for multiple posts in one round-trip, newest first per post
pub async fn find_comments_batch(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<Vec<Comment>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, user_id, content, created_at
        FROM comments
        WHERE post_id = ANY($1)
        ORDER BY created_at DESC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}
