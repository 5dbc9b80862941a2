//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Infrastructure implementations live in other crates (commentscope-llm).

/// A single chat-completion request to an LLM service
///
/// Mirrors the narrow interface the classifier needs: a fixed system
/// instruction, the user content, and decoding parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction (role: system)
    pub system: String,

    /// User content (role: user)
    pub user: String,

    /// Model identifier, e.g. "llama-3.3-70b-versatile"
    pub model: String,

    /// Decoding temperature; low values for near-deterministic output
    pub temperature: f32,

    /// Output-length cap in tokens
    pub max_tokens: u32,
}

/// Errors surfaced by an LLM provider
///
/// The classifier chooses its backoff schedule from `is_rate_limit`, so
/// providers with a structured status (an HTTP 429, an error code) must
/// report it here rather than burying it in the message text.
pub trait ProviderError: std::fmt::Display {
    /// Whether the provider reported a rate-limit rejection
    fn is_rate_limit(&self) -> bool;
}

/// Trait for LLM chat-completion operations
///
/// Implemented by the infrastructure layer (commentscope-llm). The call is
/// synchronous; async callers bridge it with a blocking task.
pub trait LlmProvider {
    /// Error type for completion operations
    type Error: ProviderError;

    /// Run one chat completion and return the model's text output
    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;
}
