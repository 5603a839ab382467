pub mod api;
pub mod auth;

pub use api::RedditClient;

use async_trait::async_trait;
use persona_core::{ContentItem, CoreError};

/// Capability: list a user's recent submissions and comments.
///
/// The pipeline depends on this seam instead of the concrete client so
/// tests can substitute a deterministic fake for the network.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch up to `max_posts` submissions and `max_comments` comments for
    /// `username`, newest first. Both listings may be empty; deciding what
    /// that means is the caller's business.
    async fn fetch_user_content(
        &self,
        username: &str,
        max_posts: u32,
        max_comments: u32,
    ) -> Result<(Vec<ContentItem>, Vec<ContentItem>), CoreError>;
}
