//! Commentscope LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `commentscope-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic scripted mock for testing
//! - `GroqProvider`: Groq's OpenAI-compatible chat-completion API
//!
//! # Examples
//!
//! ```
//! use commentscope_llm::MockProvider;
//! use commentscope_domain::traits::{CompletionRequest, LlmProvider};
//!
//! let provider = MockProvider::new(r#"{"category": "NEUTRAL"}"#);
//! let request = CompletionRequest {
//!     system: "classify".to_string(),
//!     user: "Comment: hello".to_string(),
//!     model: "test-model".to_string(),
//!     temperature: 0.1,
//!     max_tokens: 256,
//! };
//! let result = provider.complete(&request).unwrap();
//! assert!(result.contains("NEUTRAL"));
//! ```

#![warn(missing_docs)]

pub mod groq;

use commentscope_domain::traits::{CompletionRequest, LlmProvider, ProviderError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use groq::GroqProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the LLM service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded (HTTP 429 or provider-reported)
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Provider misconfiguration (missing credential, bad endpoint)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl ProviderError for LlmError {
    fn is_rate_limit(&self) -> bool {
        match self {
            LlmError::RateLimited(_) => true,
            // Fallback for message-only errors. Known fragility: an
            // unrelated message containing "limit" matches too.
            other => {
                let text = other.to_string().to_lowercase();
                text.contains("rate") || text.contains("limit") || text.contains("429")
            }
        }
    }
}

/// Mock LLM provider for deterministic testing
///
/// Returns a fixed default response, optionally preceded by a scripted
/// sequence of outcomes consumed one per call. Scripting failures first and
/// a success after them is how retry paths are exercised without a network.
///
/// # Examples
///
/// ```
/// use commentscope_llm::{LlmError, MockProvider};
/// use commentscope_domain::traits::{CompletionRequest, LlmProvider};
///
/// let provider = MockProvider::new("ok");
/// provider.push_failure(LlmError::RateLimited("429".to_string()));
/// provider.push_response("recovered");
///
/// let request = CompletionRequest {
///     system: String::new(),
///     user: String::new(),
///     model: "test".to_string(),
///     temperature: 0.0,
///     max_tokens: 16,
/// };
/// assert!(provider.complete(&request).is_err());
/// assert_eq!(provider.complete(&request).unwrap(), "recovered");
/// assert_eq!(provider.complete(&request).unwrap(), "ok");
/// assert_eq!(provider.call_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    script: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all calls
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a successful response consumed by the next unscripted call
    pub fn push_response(&self, response: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(response.into()));
    }

    /// Queue a failure consumed by the next unscripted call
    pub fn push_failure(&self, error: LlmError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Get the number of times `complete` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    fn complete(&self, _request: &CompletionRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(scripted) = self.script.lock().unwrap().pop_front() {
            return scripted;
        }

        Ok(self.default_response.clone())
    }
}
