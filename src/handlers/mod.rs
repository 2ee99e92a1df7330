/// HTTP handlers for timeline endpoints
///
/// This module contains handlers for:
/// - Posts: list recent posts, create posts
/// - Likes: toggle a like on a post
/// - Comments: create and list comments on a post
pub mod comments;
pub mod likes;
pub mod posts;

// Re-export handler functions at module level
pub use comments::{create_comment, get_post_comments};
pub use likes::toggle_like;
pub use posts::{create_post, list_posts};
