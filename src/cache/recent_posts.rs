use redis::{aio::ConnectionManager, AsyncCommands};
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::error::{AppError, Result};
use crate::metrics::timeline::{RECENT_POSTS_CACHE_EVENTS, RECENT_POSTS_CACHE_WRITE_TOTAL};
use crate::models::PostDetail;

/// Single cache key holding the hydrated recent-posts listing.
const RECENT_POSTS_KEY: &str = "recent_posts";

/// Recent-posts cache manager using Redis
#[derive(Clone)]
pub struct RecentPostsCache {
    redis: ConnectionManager,
    ttl: Duration,
}

impl RecentPostsCache {
    pub fn new(redis: ConnectionManager, ttl_secs: u64) -> Self {
        Self {
            redis,
            ttl: Duration::from_secs(ttl_secs),
        }
    }

    /// Read the cached listing. An absent key and an empty cached sequence
    /// are both reported as a miss so the caller refills from the database.
    pub async fn read(&self) -> Result<Option<Vec<PostDetail>>> {
        let mut conn = self.redis.clone();

        match conn.get::<_, Option<String>>(RECENT_POSTS_KEY).await {
            Ok(Some(data)) => {
                let posts = serde_json::from_str::<Vec<PostDetail>>(&data).map_err(|e| {
                    error!("Failed to deserialize cached recent posts: {}", e);
                    RECENT_POSTS_CACHE_EVENTS.with_label_values(&["error"]).inc();
                    AppError::Internal(format!("Cache deserialization error: {}", e))
                })?;

                if posts.is_empty() {
                    debug!("Recent posts cache entry empty, treating as MISS");
                    RECENT_POSTS_CACHE_EVENTS.with_label_values(&["miss"]).inc();
                    return Ok(None);
                }

                debug!("Recent posts cache HIT ({} posts)", posts.len());
                RECENT_POSTS_CACHE_EVENTS.with_label_values(&["hit"]).inc();
                Ok(Some(posts))
            }
            Ok(None) => {
                debug!("Recent posts cache MISS");
                RECENT_POSTS_CACHE_EVENTS.with_label_values(&["miss"]).inc();
                Ok(None)
            }
            Err(e) => {
                warn!("Redis read error for recent posts cache: {}", e);
                RECENT_POSTS_CACHE_EVENTS.with_label_values(&["error"]).inc();
                Err(AppError::CacheError(e.to_string()))
            }
        }
    }

    /// Store the listing with the configured TTL.
    pub async fn write(&self, posts: &[PostDetail]) -> Result<()> {
        let data = serde_json::to_string(posts).map_err(|e| {
            error!("Failed to serialize recent posts for cache: {}", e);
            AppError::Internal(format!("Cache serialization error: {}", e))
        })?;

        let mut conn = self.redis.clone();
        conn.set_ex::<_, _, ()>(RECENT_POSTS_KEY, data, self.ttl.as_secs())
            .await
            .map_err(|e| {
                warn!("Failed to write recent posts cache: {}", e);
                RECENT_POSTS_CACHE_WRITE_TOTAL
                    .with_label_values(&["error"])
                    .inc();
                AppError::CacheError(e.to_string())
            })?;

        debug!(
            "Recent posts cache WRITE ({} posts) with TTL {:?}",
            posts.len(),
            self.ttl
        );

        RECENT_POSTS_CACHE_WRITE_TOTAL
            .with_label_values(&["success"])
            .inc();

        Ok(())
    }

    /// Drop the cached listing. Called after every successful post creation.
    pub async fn invalidate(&self) -> Result<()> {
        let mut conn = self.redis.clone();
        conn.del::<_, ()>(RECENT_POSTS_KEY)
            .await
            .map_err(|e| AppError::CacheError(e.to_string()))?;

        debug!("Recent posts cache INVALIDATE");

        Ok(())
    }
}
