//! Classification result - the outcome of one classification attempt

use crate::{Category, Frame};

/// The outcome of classifying a single comment
///
/// Produced for every comment handed to the classifier, whether the model
/// answered cleanly, answered garbage, or never answered at all. The three
/// outcomes are distinguished by their field values, never by an error path:
///
/// - clean answer: parsed labels, model-reported confidence
/// - unparsable answer: default labels, confidence 0.0, fixed reasoning
/// - terminal failure: ERROR sentinels, confidence 0.0, stringified error
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Stance label (or the error sentinel)
    pub category: Category,

    /// Frame label (or the error sentinel)
    pub frame: Frame,

    /// Model-reported confidence, clamped to [0.0, 1.0]
    pub confidence: f64,

    /// Model's brief explanation; may be empty
    pub reasoning: String,

    /// Unparsed model output, retained for auditability.
    /// Empty when the call itself failed.
    pub raw_text: String,
}

impl ClassificationResult {
    /// Result for model output that could not be parsed at all
    ///
    /// Labels fall back to their defaults, confidence to 0.0, and the raw
    /// output is preserved.
    pub fn unparsed(raw_text: impl Into<String>) -> Self {
        Self {
            category: Category::DEFAULT,
            frame: Frame::DEFAULT,
            confidence: 0.0,
            reasoning: "Failed to parse response".to_string(),
            raw_text: raw_text.into(),
        }
    }

    /// Result for a classification call that failed after all retries
    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self {
            category: Category::Error,
            frame: Frame::Error,
            confidence: 0.0,
            reasoning: error.to_string(),
            raw_text: String::new(),
        }
    }

    /// Whether both labels are substantive (neither is the error sentinel)
    pub fn is_substantive(&self) -> bool {
        self.category.is_substantive() && self.frame.is_substantive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsed_uses_defaults() {
        let result = ClassificationResult::unparsed("no json here");
        assert_eq!(result.category, Category::Neutral);
        assert_eq!(result.frame, Frame::Conflict);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.reasoning, "Failed to parse response");
        assert_eq!(result.raw_text, "no json here");
    }

    #[test]
    fn test_failed_uses_sentinels() {
        let result = ClassificationResult::failed("HTTP 500: upstream down");
        assert_eq!(result.category, Category::Error);
        assert_eq!(result.frame, Frame::Error);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.reasoning, "HTTP 500: upstream down");
        assert!(result.raw_text.is_empty());
        assert!(!result.is_substantive());
    }
}
