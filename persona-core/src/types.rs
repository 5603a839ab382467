use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Submission,
    Comment,
}

/// One fetched post or comment, normalized for analysis.
///
/// `permalink` and `subreddit` are always non-empty; `body` may be empty
/// only for link submissions, and `url` is empty for comments.
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
    pub score: i64,
    pub created_utc: i64,
    pub subreddit: String,
    pub url: String,
    pub permalink: String,
}

/// The final artifact of a run. Written to disk once, never mutated.
#[derive(Debug, Clone)]
pub struct PersonaReport {
    pub username: String,
    pub generated_at: DateTime<Local>,
    pub posts_analyzed: usize,
    pub comments_analyzed: usize,
    pub body: String,
}
