//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the classifier and batch runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Model identifier sent with every completion request
    pub model: String,

    /// Decoding temperature (low for near-deterministic labels)
    pub temperature: f32,

    /// Output-length cap in tokens
    pub max_output_tokens: u32,

    /// Retry ceiling shared by the rate-limit and generic failure paths
    pub max_retries: u32,

    /// Base of the exponential backoff for generic failures (seconds)
    pub base_backoff_secs: u64,

    /// Unit of the linear backoff for rate-limit failures (seconds)
    pub rate_limit_backoff_secs: u64,

    /// Comment text is truncated to this many characters before submission
    pub max_comment_chars: usize,

    /// Pause between items, to stay under rate limits proactively (ms)
    pub item_delay_ms: u64,
}

impl AnalyzerConfig {
    /// Backoff before retry attempt `attempt` (0-based)
    ///
    /// Rate limits wait `rate_limit_backoff_secs * (attempt + 1)` - the
    /// external window has to pass, and each consecutive rejection waits
    /// longer. Everything else waits `base_backoff_secs * 2^attempt`. The
    /// two schedules are intentionally different and share only the ceiling.
    pub fn backoff_delay(&self, rate_limited: bool, attempt: u32) -> Duration {
        if rate_limited {
            Duration::from_secs(self.rate_limit_backoff_secs * u64::from(attempt + 1))
        } else {
            Duration::from_secs(self.base_backoff_secs * 2u64.pow(attempt))
        }
    }

    /// Pause inserted between batch items
    pub fn item_delay(&self) -> Duration {
        Duration::from_millis(self.item_delay_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be within [0.0, 2.0]".to_string());
        }
        if self.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }
        if self.max_comment_chars == 0 {
            return Err("max_comment_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    /// Defaults matching the Groq free-tier pacing this pipeline was tuned on
    fn default() -> Self {
        Self {
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.1,
            max_output_tokens: 256,
            max_retries: 5,
            base_backoff_secs: 2,
            rate_limit_backoff_secs: 60,
            max_comment_chars: 1000,
            item_delay_ms: 500,
        }
    }
}
