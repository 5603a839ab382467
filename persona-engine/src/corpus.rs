use persona_core::ContentItem;
use std::borrow::Cow;
use std::fmt::Write;

/// Hard cap on numbered items per section, regardless of fetch count.
pub const MAX_ITEMS_PER_SECTION: usize = 25;
pub const POST_BODY_LIMIT: usize = 500;
pub const COMMENT_BODY_LIMIT: usize = 300;
pub const TRUNCATION_MARKER: &str = "...";

/// Serialize fetched content into the bounded text block handed to the
/// model. Items keep their fetch order (newest first); bodies are cut at a
/// plain character limit to bound prompt size. No escaping is performed.
pub fn format_corpus(posts: &[ContentItem], comments: &[ContentItem]) -> String {
    let mut out = String::from("REDDIT USER CONTENT FOR ANALYSIS:\n\n");

    out.push_str("=== POSTS ===\n");
    for (i, post) in posts.iter().take(MAX_ITEMS_PER_SECTION).enumerate() {
        let _ = write!(
            out,
            "\nPOST {}:\nSubreddit: r/{}\nTitle: {}\nContent: {}\nScore: {}\nLink: {}\n",
            i + 1,
            post.subreddit,
            post.title,
            truncate_body(&post.body, POST_BODY_LIMIT),
            post.score,
            post.permalink
        );
    }

    out.push_str("\n=== COMMENTS ===\n");
    for (i, comment) in comments.iter().take(MAX_ITEMS_PER_SECTION).enumerate() {
        let _ = write!(
            out,
            "\nCOMMENT {}:\nSubreddit: r/{}\nContent: {}\nScore: {}\nLink: {}\n",
            i + 1,
            comment.subreddit,
            truncate_body(&comment.body, COMMENT_BODY_LIMIT),
            comment.score,
            comment.permalink
        );
    }

    out
}

/// Cut `body` to at most `limit` characters, appending the truncation
/// marker when anything was dropped. Counts characters, not bytes, so
/// multibyte content never splits a code point.
fn truncate_body(body: &str, limit: usize) -> Cow<'_, str> {
    match body.char_indices().nth(limit) {
        Some((byte_idx, _)) => {
            let mut cut = body[..byte_idx].to_string();
            cut.push_str(TRUNCATION_MARKER);
            Cow::Owned(cut)
        }
        None => Cow::Borrowed(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_core::ContentKind;

    fn submission(subreddit: &str, title: &str, body: &str) -> ContentItem {
        ContentItem {
            kind: ContentKind::Submission,
            title: title.to_string(),
            body: body.to_string(),
            score: 10,
            created_utc: 1_640_995_200,
            subreddit: subreddit.to_string(),
            url: String::new(),
            permalink: format!("https://reddit.com/r/{}/comments/x/", subreddit),
        }
    }

    fn comment(subreddit: &str, body: &str) -> ContentItem {
        ContentItem {
            kind: ContentKind::Comment,
            title: format!("Comment in r/{}", subreddit),
            body: body.to_string(),
            score: 5,
            created_utc: 1_640_995_200,
            subreddit: subreddit.to_string(),
            url: String::new(),
            permalink: format!("https://reddit.com/r/{}/comments/y/c1", subreddit),
        }
    }

    #[test]
    fn test_short_bodies_pass_through() {
        let body = "a".repeat(500);
        let posts = [submission("rust", "Title", &body)];
        let formatted = format_corpus(&posts, &[]);
        assert!(formatted.contains(&format!("Content: {}\n", body)));
        assert!(!formatted.contains(&format!("{}...", body)));
    }

    #[test]
    fn test_long_post_body_truncated_at_500() {
        let body = "b".repeat(600);
        let posts = [submission("rust", "Title", &body)];
        let formatted = format_corpus(&posts, &[]);
        let expected = format!("Content: {}...\n", "b".repeat(500));
        assert!(formatted.contains(&expected));
        assert!(!formatted.contains(&"b".repeat(501)));
    }

    #[test]
    fn test_long_comment_body_truncated_at_300() {
        let body = "c".repeat(301);
        let comments = [comment("rust", &body)];
        let formatted = format_corpus(&[], &comments);
        let expected = format!("Content: {}...\n", "c".repeat(300));
        assert!(formatted.contains(&expected));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let body = "é".repeat(510);
        let posts = [submission("france", "Titre", &body)];
        let formatted = format_corpus(&posts, &[]);
        let expected = format!("Content: {}...\n", "é".repeat(500));
        assert!(formatted.contains(&expected));
    }

    #[test]
    fn test_section_cap_at_25_items() {
        let posts: Vec<ContentItem> = (0..40)
            .map(|i| submission("rust", &format!("Post {}", i), "body"))
            .collect();
        let comments: Vec<ContentItem> = (0..30).map(|_| comment("rust", "body")).collect();

        let formatted = format_corpus(&posts, &comments);
        assert!(formatted.contains("POST 25:"));
        assert!(!formatted.contains("POST 26:"));
        assert!(formatted.contains("COMMENT 25:"));
        assert!(!formatted.contains("COMMENT 26:"));
    }

    #[test]
    fn test_layout_and_ordering() {
        let posts = [
            submission("delhi", "First", "one"),
            submission("pics", "Second", "two"),
        ];
        let comments = [comment("nagpur", "a reply")];

        let formatted = format_corpus(&posts, &comments);
        assert!(formatted.starts_with("REDDIT USER CONTENT FOR ANALYSIS:\n\n=== POSTS ===\n"));
        assert!(formatted.contains("\nPOST 1:\nSubreddit: r/delhi\nTitle: First\n"));
        assert!(formatted.contains("\nPOST 2:\nSubreddit: r/pics\nTitle: Second\n"));
        assert!(formatted.contains("\n=== COMMENTS ===\n"));
        assert!(formatted.contains("\nCOMMENT 1:\nSubreddit: r/nagpur\nContent: a reply\n"));
        let posts_at = formatted.find("POST 1:").unwrap();
        let comments_at = formatted.find("COMMENT 1:").unwrap();
        assert!(posts_at < comments_at);
    }

    #[test]
    fn test_empty_input_still_emits_sections() {
        let formatted = format_corpus(&[], &[]);
        assert!(formatted.contains("=== POSTS ==="));
        assert!(formatted.contains("=== COMMENTS ==="));
        assert!(!formatted.contains("POST 1:"));
    }
}
