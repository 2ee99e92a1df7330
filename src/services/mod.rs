/// Business logic layer for timeline-service
///
/// This module provides high-level operations:
/// - Post service: cached recent listing, post creation with invalidation
/// - Like service: atomic like toggling
/// - Comment service: comment creation and listing
pub mod comments;
pub mod likes;
pub mod posts;

// Re-export commonly used services
pub use comments::CommentService;
pub use likes::LikeService;
pub use posts::PostService;
