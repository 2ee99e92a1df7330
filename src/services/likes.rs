/// Like service - atomic like toggling
use crate::db::{like_repo, post_repo};
use crate::error::{AppError, Result};
use crate::metrics::timeline::LIKE_TOGGLE_TOTAL;
use sqlx::PgPool;
use uuid::Uuid;

pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toggle the like state for (user, post).
    ///
    /// The post must exist; an unknown id surfaces as NotFound rather than a
    /// storage fault. The flip itself is one atomic statement, so repeated or
    /// concurrent toggles never violate the one-like-per-user invariant.
    ///
    /// Returns true when the post is now liked, false when unliked.
    pub async fn toggle(&self, post_id: Uuid, user_id: Uuid) -> Result<bool> {
        if post_repo::find_post_by_id(&self.pool, post_id).await?.is_none() {
            return Err(AppError::NotFound(format!("post {} does not exist", post_id)));
        }

        let liked = like_repo::toggle_like(&self.pool, post_id, user_id).await?;

        let state = if liked { "liked" } else { "unliked" };
        LIKE_TOGGLE_TOTAL.with_label_values(&[state]).inc();
        tracing::debug!(%post_id, %user_id, state, "like toggled");

        Ok(liked)
    }
}
