//! Groq Provider Implementation
//!
//! Chat completions against Groq's OpenAI-compatible API.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Bearer-token authentication, validated at construction
//! - Structured rate-limit surfacing: HTTP 429 becomes `LlmError::RateLimited`
//!   so callers never have to scrape message text
//!
//! The provider performs exactly one attempt per call; retry policy belongs
//! to the classifier that owns the backoff schedule.

use crate::LlmError;
use commentscope_domain::traits::{CompletionRequest, LlmProvider as LlmProviderTrait};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Groq API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1";

/// Default timeout for completion requests (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Groq chat-completion provider
pub struct GroqProvider {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl GroqProvider {
    /// Create a new Groq provider
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Configuration` if the API key is empty or the HTTP
    /// client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::Configuration(
                "missing Groq API key".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
            client,
        })
    }

    /// Override the API endpoint (for OpenAI-compatible proxies and tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Run one chat completion and return the model's text output
    ///
    /// # Errors
    ///
    /// - `LlmError::RateLimited` on HTTP 429
    /// - `LlmError::Communication` on transport failures and other non-2xx
    ///   statuses
    /// - `LlmError::InvalidResponse` when the body cannot be decoded or has
    ///   no choices
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint.trim_end_matches('/'));

        let body = ChatCompletionRequest {
            model: &request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "rate limited".to_string());
            return Err(LlmError::RateLimited(text));
        }
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, text)));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_string()))
    }
}

impl LlmProviderTrait for GroqProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for the async implementation
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("failed to start runtime: {}", e)))?;
        runtime.block_on(async { self.complete(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commentscope_domain::traits::ProviderError;

    fn request() -> CompletionRequest {
        CompletionRequest {
            system: "You are a researcher.".to_string(),
            user: "Comment: test".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.1,
            max_tokens: 256,
        }
    }

    #[test]
    fn test_provider_creation() {
        let provider = GroqProvider::new("gsk_test").unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_provider_rejects_empty_key() {
        let result = GroqProvider::new("   ");
        assert!(matches!(result, Err(LlmError::Configuration(_))));
    }

    #[test]
    fn test_provider_endpoint_override() {
        let provider = GroqProvider::new("gsk_test")
            .unwrap()
            .with_endpoint("http://localhost:8080/v1");
        assert_eq!(provider.endpoint, "http://localhost:8080/v1");
    }

    #[tokio::test]
    async fn test_connection_error_surfaces_as_communication() {
        let provider = GroqProvider::new("gsk_test")
            .unwrap()
            .with_endpoint("http://127.0.0.1:1/v1");

        let result = provider.complete(&request()).await;
        match result {
            Err(err @ LlmError::Communication(_)) => assert!(!err.is_rate_limit()),
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }

    // Integration test (requires a real key in GROQ_API_KEY)
    #[tokio::test]
    #[ignore]
    async fn test_groq_complete_integration() {
        let key = std::env::var("GROQ_API_KEY").unwrap();
        let provider = GroqProvider::new(key).unwrap();
        let result = provider.complete(&request()).await;

        if let Ok(text) = result {
            assert!(!text.is_empty());
        }
    }
}
