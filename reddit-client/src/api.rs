use crate::auth;
use crate::ContentSource;
use async_trait::async_trait;
use persona_core::{AppConfig, ContentItem, ContentKind, CoreError, RedditApiError};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

const REDDIT_API_BASE: &str = "https://oauth.reddit.com";
const PERMALINK_BASE: &str = "https://reddit.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListing<T> {
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingData<T> {
    pub children: Vec<RedditListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub dist: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditSubmissionData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    pub subreddit: String,
    #[serde(default)]
    pub url: String,
    pub permalink: String,
    pub created_utc: f64,
    #[serde(default)]
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditCommentData {
    #[serde(default)]
    pub body: String,
    pub subreddit: String,
    pub permalink: String,
    pub created_utc: f64,
    #[serde(default)]
    pub score: i64,
}

impl From<RedditSubmissionData> for ContentItem {
    fn from(data: RedditSubmissionData) -> Self {
        Self {
            kind: ContentKind::Submission,
            title: data.title,
            body: data.selftext,
            score: data.score,
            created_utc: data.created_utc as i64,
            subreddit: data.subreddit,
            url: data.url,
            permalink: format!("{}{}", PERMALINK_BASE, data.permalink),
        }
    }
}

impl From<RedditCommentData> for ContentItem {
    fn from(data: RedditCommentData) -> Self {
        Self {
            kind: ContentKind::Comment,
            title: format!("Comment in r/{}", data.subreddit),
            body: data.body,
            score: data.score,
            created_utc: data.created_utc as i64,
            subreddit: data.subreddit,
            url: String::new(),
            permalink: format!("{}{}", PERMALINK_BASE, data.permalink),
        }
    }
}

/// Reddit API client performing app-only authenticated listing reads.
#[derive(Debug)]
pub struct RedditClient {
    http_client: Client,
    client_id: String,
    client_secret: String,
    user_agent: String,
}

impl RedditClient {
    pub fn new(config: &AppConfig) -> Result<Self, CoreError> {
        let http_client = Client::builder()
            .user_agent(&config.reddit_user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http_client,
            client_id: config.reddit_client_id.clone(),
            client_secret: config.reddit_client_secret.clone(),
            user_agent: config.reddit_user_agent.clone(),
        })
    }

    pub async fn authenticate(&self) -> Result<String, CoreError> {
        auth::request_app_token(&self.http_client, &self.client_id, &self.client_secret).await
    }

    async fn make_request(
        &self,
        username: &str,
        endpoint: &str,
        access_token: &str,
        query_params: &[(&str, &str)],
    ) -> Result<Response, CoreError> {
        let url = format!("{}{}", REDDIT_API_BASE, endpoint);

        debug!("Making Reddit API request: GET {}", endpoint);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .header("User-Agent", &self.user_agent)
            .query(query_params)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Request successful: {} {}", status, endpoint);
            return Ok(response);
        }

        warn!("Request failed with status {} for {}", status, endpoint);
        if status.as_u16() == 401 {
            return Err(CoreError::RedditApi(RedditApiError::AuthenticationFailed {
                reason: "access token rejected".to_string(),
            }));
        }
        Err(CoreError::RedditApi(RedditApiError::ListingFailed {
            username: username.to_string(),
            status_code: status.as_u16(),
        }))
    }

    /// Fetch the user's most recent submissions, newest first, in a single
    /// bounded listing call. Link posts with neither title nor body are
    /// excluded since they carry nothing to analyze.
    pub async fn fetch_submissions(
        &self,
        access_token: &str,
        username: &str,
        limit: u32,
    ) -> Result<Vec<ContentItem>, CoreError> {
        let endpoint = format!("/user/{}/submitted", username);
        let limit_str = limit.to_string();
        let params = [
            ("sort", "new"),
            ("limit", limit_str.as_str()),
            ("raw_json", "1"),
        ];

        let response = self
            .make_request(username, &endpoint, access_token, &params)
            .await?;

        let listing: RedditListing<RedditSubmissionData> =
            response.json().await.map_err(|e| {
                CoreError::RedditApi(RedditApiError::InvalidResponse {
                    details: format!("failed to parse submissions for u/{}: {}", username, e),
                })
            })?;

        let posts: Vec<ContentItem> = listing
            .data
            .children
            .into_iter()
            .map(|child| child.data)
            .filter(|data| !data.title.is_empty() || !data.selftext.is_empty())
            .map(ContentItem::from)
            .collect();

        info!("Retrieved {} submissions for u/{}", posts.len(), username);
        Ok(posts)
    }

    /// Fetch the user's most recent comments, newest first, in a single
    /// bounded listing call. Comments with empty bodies are excluded.
    pub async fn fetch_comments(
        &self,
        access_token: &str,
        username: &str,
        limit: u32,
    ) -> Result<Vec<ContentItem>, CoreError> {
        let endpoint = format!("/user/{}/comments", username);
        let limit_str = limit.to_string();
        let params = [
            ("sort", "new"),
            ("limit", limit_str.as_str()),
            ("raw_json", "1"),
        ];

        let response = self
            .make_request(username, &endpoint, access_token, &params)
            .await?;

        let listing: RedditListing<RedditCommentData> = response.json().await.map_err(|e| {
            CoreError::RedditApi(RedditApiError::InvalidResponse {
                details: format!("failed to parse comments for u/{}: {}", username, e),
            })
        })?;

        let comments: Vec<ContentItem> = listing
            .data
            .children
            .into_iter()
            .map(|child| child.data)
            .filter(|data| !data.body.is_empty())
            .map(ContentItem::from)
            .collect();

        info!("Retrieved {} comments for u/{}", comments.len(), username);
        Ok(comments)
    }
}

#[async_trait]
impl ContentSource for RedditClient {
    async fn fetch_user_content(
        &self,
        username: &str,
        max_posts: u32,
        max_comments: u32,
    ) -> Result<(Vec<ContentItem>, Vec<ContentItem>), CoreError> {
        let access_token = self.authenticate().await?;

        info!("Scraping data for user: {}", username);
        let posts = self
            .fetch_submissions(&access_token, username, max_posts)
            .await?;
        let comments = self
            .fetch_comments(&access_token, username, max_comments)
            .await?;

        Ok((posts, comments))
    }
}
