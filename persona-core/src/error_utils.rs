use crate::error::*;
use tracing::error;

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!(code = %self.error_code(), "CoreError: {}", self);
        match self {
            CoreError::RedditApi(e) => {
                error!("Reddit API error details: {:?}", e);
            }
            CoreError::Llm(e) => {
                error!("LLM error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::RedditApi(e) => e.user_friendly_message(),
            CoreError::Llm(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            CoreError::Io(_) => {
                "Failed to write the report file. Please check the output directory.".to_string()
            }
            CoreError::InvalidIdentifier { input } => {
                format!("Could not extract a Reddit username from '{}'.", input)
            }
            CoreError::NoContentFound { username } => format!(
                "No posts or comments found for u/{}. The account may be empty, suspended or shadowbanned.",
                username
            ),
            _ => "An unexpected error occurred. Please try again later.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::RedditApi(e) => e.error_code(),
            CoreError::Llm(e) => e.error_code(),
            CoreError::Config(e) => e.error_code(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
            CoreError::InvalidIdentifier { .. } => "INVALID_IDENTIFIER".to_string(),
            CoreError::NoContentFound { .. } => "NO_CONTENT_FOUND".to_string(),
        }
    }
}

impl ErrorExt for RedditApiError {
    fn log_error(&self) -> &Self {
        error!("RedditApiError: {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            RedditApiError::AuthenticationFailed { .. } => {
                "Reddit authentication failed. Please check your client id and secret.".to_string()
            }
            RedditApiError::ListingFailed {
                username,
                status_code,
            } => format!(
                "Could not fetch content for u/{} (HTTP {}). The user may not exist or may be suspended.",
                username, status_code
            ),
            RedditApiError::InvalidResponse { .. } => {
                "Reddit returned an unexpected response. Please try again later.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            RedditApiError::AuthenticationFailed { .. } => "REDDIT_AUTH_FAILED".to_string(),
            RedditApiError::ListingFailed { .. } => "REDDIT_LISTING_FAILED".to_string(),
            RedditApiError::InvalidResponse { .. } => "REDDIT_INVALID_RESPONSE".to_string(),
        }
    }
}

impl ErrorExt for LlmError {
    fn log_error(&self) -> &Self {
        error!("LlmError: {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            LlmError::CompletionFailed { status_code, .. } => format!(
                "The AI completion service rejected the request (HTTP {}). Please check your API key and credits.",
                status_code
            ),
            LlmError::InvalidResponseFormat { provider } => format!(
                "{} returned a response in an unexpected shape.",
                provider
            ),
        }
    }

    fn error_code(&self) -> String {
        match self {
            LlmError::CompletionFailed { .. } => "LLM_COMPLETION_FAILED".to_string(),
            LlmError::InvalidResponseFormat { .. } => "LLM_INVALID_RESPONSE".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::MissingEnvironmentVariables { vars } => format!(
                "Missing required environment variables: {}. Please check your .env file.",
                vars.join(", ")
            ),
            ConfigError::InvalidValue { field, value } => {
                format!("Invalid value '{}' for configuration field '{}'.", value, field)
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::MissingEnvironmentVariables { .. } => "CONFIG_MISSING_ENV_VAR".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
        }
    }
}
