use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Reddit API error: {0}")]
    RedditApi(#[from] RedditApiError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Could not extract a username from: {input}")]
    InvalidIdentifier { input: String },

    #[error("No posts or comments found for user: {username}")]
    NoContentFound { username: String },
}

#[derive(Error, Debug, Clone)]
pub enum RedditApiError {
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Listing request for u/{username} failed with status {status_code}")]
    ListingFailed { username: String, status_code: u16 },

    #[error("Invalid API response: {details}")]
    InvalidResponse { details: String },
}

#[derive(Error, Debug, Clone)]
pub enum LlmError {
    #[error("Completion API error {status_code}: {body}")]
    CompletionFailed { status_code: u16, body: String },

    #[error("Invalid response format from {provider}")]
    InvalidResponseFormat { provider: String },
}

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", vars.join(", "))]
    MissingEnvironmentVariables { vars: Vec<String> },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}
