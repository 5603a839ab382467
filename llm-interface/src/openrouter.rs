use crate::{ChatRequest, CompletionClient};
use async_trait::async_trait;
use persona_core::{AppConfig, CoreError, LlmError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

const PROVIDER_NAME: &str = "OpenRouter";

// Completions can run long with a 4000 token budget.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

/// Build the chat-completion request body for one persona analysis call.
pub fn build_request(model: &str, request: &ChatRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: request.system.clone(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: request.user.clone(),
            },
        ],
        temperature: request.temperature,
        max_tokens: request.max_tokens,
    }
}

/// Extract the first choice's message content from a response body.
pub fn parse_response(body: &str) -> Result<String, CoreError> {
    let response: ChatCompletionResponse = serde_json::from_str(body).map_err(|_| {
        CoreError::Llm(LlmError::InvalidResponseFormat {
            provider: PROVIDER_NAME.to_string(),
        })
    })?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| {
            CoreError::Llm(LlmError::InvalidResponseFormat {
                provider: PROVIDER_NAME.to_string(),
            })
        })
}

/// Chat-completion client for the OpenRouter-compatible endpoint.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http_client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(config: &AppConfig) -> Result<Self, CoreError> {
        let http_client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http_client,
            api_key: config.completion_api_key.clone(),
            api_url: config.completion_api_url.clone(),
            model: config.completion_model.clone(),
        })
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, CoreError> {
        let payload = build_request(&self.model, &request);

        info!(model = %self.model, "Sending content to AI for analysis");
        let response = self
            .http_client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CoreError::Llm(LlmError::CompletionFailed {
                status_code: status.as_u16(),
                body,
            }));
        }

        debug!("Completion response received ({} bytes)", body.len());
        parse_response(&body)
    }
}
