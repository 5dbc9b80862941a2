//! Retrying classifier - one comment in, one classification out

use crate::config::AnalyzerConfig;
use crate::parser::parse_classification;
use crate::prompt::{self, SYSTEM_PROMPT};
use commentscope_domain::traits::{CompletionRequest, LlmProvider, ProviderError};
use commentscope_domain::{ClassificationResult, Comment};
use std::fmt;
use std::sync::Arc;
use tracing::{error, warn};

/// Wraps a single classification call with bounded retry and backoff
///
/// `classify` never fails: transient errors are retried up to the shared
/// ceiling, and a comment whose retries are exhausted comes back as an
/// ERROR-sentinel result instead of an error. Rate-limit rejections wait on
/// the linear schedule, everything else on the exponential one.
pub struct Classifier<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: AnalyzerConfig,
}

/// Stringified provider failure, with the rate-limit flag captured before
/// the error type is erased
struct CallFailure {
    message: String,
    rate_limited: bool,
}

impl fmt::Display for CallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<L> Classifier<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Send + 'static,
{
    /// Create a new classifier over the given provider
    pub fn new(provider: L, config: AnalyzerConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Classify one comment, retrying transient failures
    ///
    /// The comment body is truncated to the configured length before
    /// submission. Attempt `r` (0-based) that fails sleeps
    /// `rate_limit_backoff_secs * (r + 1)` when rate-limited, else
    /// `base_backoff_secs * 2^r`, then retries, until `max_retries`
    /// retries have been spent.
    pub async fn classify(&self, comment: &Comment) -> ClassificationResult {
        let request = CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            user: prompt::user_content(&comment.body, self.config.max_comment_chars),
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_output_tokens,
        };

        let mut attempt: u32 = 0;
        loop {
            match self.call_provider(&request).await {
                Ok(text) => return parse_classification(&text),
                Err(failure) => {
                    if attempt >= self.config.max_retries {
                        error!(
                            comment_id = %comment.comment_id,
                            "Classification failed after {} retries: {}",
                            self.config.max_retries, failure
                        );
                        return ClassificationResult::failed(failure);
                    }

                    let delay = self.config.backoff_delay(failure.rate_limited, attempt);
                    if failure.rate_limited {
                        warn!(
                            "Rate limited; waiting {}s before retry {}/{}",
                            delay.as_secs(),
                            attempt + 1,
                            self.config.max_retries
                        );
                    } else {
                        warn!(
                            "API error: {}; retrying in {}s",
                            failure,
                            delay.as_secs()
                        );
                    }
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Call the provider on a blocking task
    async fn call_provider(&self, request: &CompletionRequest) -> Result<String, CallFailure> {
        let provider = Arc::clone(&self.provider);
        let request = request.clone();

        let joined = tokio::task::spawn_blocking(move || {
            provider.complete(&request).map_err(|e| CallFailure {
                message: e.to_string(),
                rate_limited: e.is_rate_limit(),
            })
        })
        .await;

        match joined {
            Ok(result) => result,
            Err(e) => Err(CallFailure {
                message: format!("Task join error: {}", e),
                rate_limited: false,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commentscope_domain::{Bias, Category, Frame};
    use commentscope_llm::{LlmError, MockProvider};

    fn fast_config() -> AnalyzerConfig {
        AnalyzerConfig {
            base_backoff_secs: 0,
            rate_limit_backoff_secs: 0,
            item_delay_ms: 0,
            ..AnalyzerConfig::default()
        }
    }

    fn comment() -> Comment {
        Comment {
            comment_id: "c1".to_string(),
            body: "This was legal self-defense.".to_string(),
            source: "Fox News".to_string(),
            bias: Bias::Right,
            score: 10,
            date: "2026-01-20".to_string(),
            video_title: "Coverage".to_string(),
            author: "user".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let provider = MockProvider::new(
            "{\"category\": \"JUSTIFIED\", \"frame\": \"LEGALITY\", \"confidence\": 0.9, \"reasoning\": \"cites law\"}",
        );
        let probe = provider.clone();
        let classifier = Classifier::new(provider, fast_config());

        let result = classifier.classify(&comment()).await;
        assert_eq!(result.category, Category::Justified);
        assert_eq!(result.frame, Frame::Legality);
        assert_eq!(probe.call_count(), 1);
    }

    #[tokio::test]
    async fn test_rate_limit_retries_then_succeeds() {
        let provider = MockProvider::new("{\"category\": \"NEUTRAL\", \"frame\": \"CONFLICT\"}");
        provider.push_failure(LlmError::RateLimited("slow down".to_string()));
        provider.push_failure(LlmError::RateLimited("slow down".to_string()));
        let probe = provider.clone();
        let classifier = Classifier::new(provider, fast_config());

        let result = classifier.classify(&comment()).await;
        assert_eq!(result.category, Category::Neutral);
        assert!(result.is_substantive());
        // Two rate-limited attempts plus the success
        assert_eq!(probe.call_count(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_retries_return_sentinel() {
        let provider = MockProvider::new("unused");
        let mut config = fast_config();
        config.max_retries = 2;
        for _ in 0..=config.max_retries {
            provider.push_failure(LlmError::Communication("connection refused".to_string()));
        }
        let probe = provider.clone();
        let classifier = Classifier::new(provider, config);

        let result = classifier.classify(&comment()).await;
        assert_eq!(result.category, Category::Error);
        assert_eq!(result.frame, Frame::Error);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.reasoning, "Communication error: connection refused");
        assert!(result.raw_text.is_empty());
        // Initial attempt plus max_retries retries
        assert_eq!(probe.call_count(), 3);
    }

    #[tokio::test]
    async fn test_unparsable_success_is_not_retried() {
        let provider = MockProvider::new("no json here");
        let probe = provider.clone();
        let classifier = Classifier::new(provider, fast_config());

        let result = classifier.classify(&comment()).await;
        // A garbage answer is still an answer; retries are for call failures
        assert_eq!(probe.call_count(), 1);
        assert_eq!(result.category, Category::Neutral);
        assert_eq!(result.frame, Frame::Conflict);
        assert_eq!(result.reasoning, "Failed to parse response");
        assert_eq!(result.raw_text, "no json here");
    }
}
