use crate::models::Like;
use sqlx::PgPool;
use uuid::Uuid;

/// Flip the like state for (user, post) in a single atomic statement.
///
/// The statement deletes an existing like, or inserts one when nothing was
/// deleted. Both branches run against the same snapshot, so concurrent
/// toggles serialize on the (user_id, post_id) unique constraint and can
/// never leave more than one row.
///
/// Returns true when the like now exists, false when it was removed.
pub async fn toggle_like(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let liked: bool = sqlx::query_scalar(
        r#"
        WITH removed AS (
            DELETE FROM likes
            WHERE user_id = $1 AND post_id = $2
            RETURNING id
        ),
        added AS (
            INSERT INTO likes (user_id, post_id)
            SELECT $1, $2
            WHERE NOT EXISTS (SELECT 1 FROM removed)
            ON CONFLICT (user_id, post_id) DO NOTHING
            RETURNING id
        )
        SELECT EXISTS(SELECT 1 FROM added)
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(liked)
}

/// Check if a user has liked a post
pub async fn find_like(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Like>, sqlx::Error> {
    let like = sqlx::query_as::<_, Like>(
        r#"
        SELECT id, post_id, user_id, created_at
        FROM likes
        WHERE post_id = $1 AND user_id = $2
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(like)
}

/// Count total likes for a post
pub async fn count_likes_by_post(pool: &PgPool, post_id: Uuid) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Get likes for multiple posts in one round-trip, newest first per post
pub async fn find_likes_batch(
    pool: &PgPool,
    post_ids: &[Uuid],
) -> Result<Vec<Like>, sqlx::Error> {
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let likes = sqlx::query_as::<_, Like>(
        r#"
        SELECT id, post_id, user_id, created_at
        FROM likes
        WHERE post_id = ANY($1)
        ORDER BY created_at DESC
        "#,
    )
    .bind(post_ids)
    .fetch_all(pool)
    .await?;

    Ok(likes)
}
