use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "reddit-persona/0.1 (user persona analyzer)";
pub const DEFAULT_COMPLETION_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-chat-v3-0324";
pub const DEFAULT_MAX_POSTS: u32 = 50;
pub const DEFAULT_MAX_COMMENTS: u32 = 50;
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Immutable run configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_user_agent: String,
    pub completion_api_key: String,
    pub completion_api_url: String,
    pub completion_model: String,
    pub max_posts: u32,
    pub max_comments: u32,
    pub output_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    ///
    /// Every missing required key is collected before failing, so the
    /// operator sees the full list in one error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Tests inject a
    /// map here instead of mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count the same as unset ones.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut require = |key: &str| match get(key) {
            Some(value) => value,
            None => {
                missing.push(key.to_string());
                String::new()
            }
        };

        let reddit_client_id = require("REDDIT_CLIENT_ID");
        let reddit_client_secret = require("REDDIT_CLIENT_SECRET");
        let completion_api_key = require("OPENROUTER_API_KEY");

        if !missing.is_empty() {
            return Err(ConfigError::MissingEnvironmentVariables { vars: missing });
        }

        let max_posts = parse_limit(&get, "MAX_POSTS", DEFAULT_MAX_POSTS)?;
        let max_comments = parse_limit(&get, "MAX_COMMENTS", DEFAULT_MAX_COMMENTS)?;

        Ok(Self {
            reddit_client_id,
            reddit_client_secret,
            reddit_user_agent: get("REDDIT_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            completion_api_key,
            completion_api_url: get("AI_API_URL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_URL.to_string()),
            completion_model: get("AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_posts,
            max_comments,
            output_dir: PathBuf::from(
                get("OUTPUT_DIR").unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            ),
        })
    }
}

fn parse_limit<F>(get: &F, field: &str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(field) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            field: field.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
