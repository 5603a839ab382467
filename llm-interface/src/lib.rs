pub mod openrouter;

pub use openrouter::OpenRouterClient;

use async_trait::async_trait;
use persona_core::CoreError;

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// One chat-completion call: a system message establishing the analyst
/// role and a user message carrying the full prompt.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ChatRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Capability: complete a chat prompt. Tests substitute a deterministic
/// fake; the real implementation is [`OpenRouterClient`].
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue a single synchronous completion request and return the first
    /// choice's message content verbatim. No retry, no streaming.
    async fn complete(&self, request: ChatRequest) -> Result<String, CoreError>;
}
