//! Parse LLM output into a classification result

use commentscope_domain::{Category, ClassificationResult, Frame};
use serde::Deserialize;
use tracing::warn;

/// Fields the model is asked to return; all optional so partial output
/// still normalizes
#[derive(Debug, Default, Deserialize)]
struct ResponsePayload {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    frame: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    reasoning: Option<String>,
}

/// Reduce free-form model output to a normalized classification result
///
/// Decoding is an ordered fallback chain, first success wins:
/// 1. the interior of a fenced code block, if present, becomes the candidate
/// 2. the first flat brace-delimited substring of the candidate as JSON
/// 3. the entire candidate as JSON
///
/// On success, missing fields default (category NEUTRAL, frame CONFLICT,
/// confidence 0.5, reasoning empty) and confidence is clamped to [0, 1].
/// Unrecognized label strings also fall back to the defaults, so the result
/// never carries arbitrary text as a label. When nothing decodes, the
/// result is the fixed parse-failure record. The raw output is preserved
/// either way.
pub fn parse_classification(response: &str) -> ClassificationResult {
    let candidate = extract_candidate(response);

    let payload = match decode(candidate) {
        Some(payload) => payload,
        None => {
            warn!("Model output contained no decodable JSON");
            return ClassificationResult::unparsed(response);
        }
    };

    ClassificationResult {
        category: payload
            .category
            .as_deref()
            .and_then(Category::parse)
            .unwrap_or(Category::DEFAULT),
        frame: payload
            .frame
            .as_deref()
            .and_then(Frame::parse)
            .unwrap_or(Frame::DEFAULT),
        confidence: payload.confidence.unwrap_or(0.5).clamp(0.0, 1.0),
        reasoning: payload.reasoning.unwrap_or_default(),
        raw_text: response.to_string(),
    }
}

/// Candidate text for JSON decoding: the interior of the first fenced code
/// block (optionally tagged `json`), or the whole response when no complete
/// fence is present
fn extract_candidate(response: &str) -> &str {
    if let Some(open) = response.find("```") {
        let mut interior = &response[open + 3..];
        if let Some(stripped) = interior.strip_prefix("json") {
            interior = stripped;
        }
        if let Some(close) = interior.find("```") {
            return interior[..close].trim();
        }
    }
    response.trim()
}

/// First flat brace-delimited substring: an opening brace followed by a
/// closing brace with no nested braces between them
fn find_flat_object(text: &str) -> Option<&str> {
    let mut open = None;
    for (index, byte) in text.bytes().enumerate() {
        match byte {
            b'{' => open = Some(index),
            b'}' => {
                if let Some(start) = open {
                    return Some(&text[start..=index]);
                }
            }
            _ => {}
        }
    }
    None
}

fn decode(candidate: &str) -> Option<ResponsePayload> {
    if let Some(object) = find_flat_object(candidate) {
        if let Ok(payload) = serde_json::from_str(object) {
            return Some(payload);
        }
    }
    serde_json::from_str(candidate).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fenced_json_block() {
        let response =
            "```json\n{\"category\":\"JUSTIFIED\",\"frame\":\"LEGALITY\",\"confidence\":0.9,\"reasoning\":\"x\"}\n```";
        let result = parse_classification(response);

        assert_eq!(result.category, Category::Justified);
        assert_eq!(result.frame, Frame::Legality);
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.reasoning, "x");
        assert_eq!(result.raw_text, response);
    }

    #[test]
    fn test_parse_fence_without_language_tag() {
        let response = "```\n{\"category\": \"EXCESSIVE\", \"frame\": \"MORALITY\"}\n```";
        let result = parse_classification(response);
        assert_eq!(result.category, Category::Excessive);
        assert_eq!(result.frame, Frame::Morality);
    }

    #[test]
    fn test_parse_object_embedded_in_prose() {
        let response = "Here is my analysis: {\"category\": \"NEUTRAL\", \"frame\": \"CONFLICT\", \"confidence\": 0.4, \"reasoning\": \"unclear\"} hope that helps!";
        let result = parse_classification(response);
        assert_eq!(result.category, Category::Neutral);
        assert_eq!(result.confidence, 0.4);
    }

    #[test]
    fn test_parse_bare_json() {
        let response = "{\"category\": \"JUSTIFIED\", \"frame\": \"LEGALITY\"}";
        let result = parse_classification(response);
        assert_eq!(result.category, Category::Justified);
        assert_eq!(result.frame, Frame::Legality);
    }

    #[test]
    fn test_parse_failure_yields_fixed_record() {
        let result = parse_classification("no json here");

        assert_eq!(result.category, Category::Neutral);
        assert_eq!(result.frame, Frame::Conflict);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.reasoning, "Failed to parse response");
        assert_eq!(result.raw_text, "no json here");
    }

    #[test]
    fn test_missing_fields_are_defaulted() {
        let result = parse_classification("{\"category\": \"EXCESSIVE\"}");

        assert_eq!(result.category, Category::Excessive);
        assert_eq!(result.frame, Frame::Conflict);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.reasoning, "");
    }

    #[test]
    fn test_unrecognized_labels_fall_back_to_defaults() {
        let result = parse_classification(
            "{\"category\": \"OUTRAGED\", \"frame\": \"ECONOMICS\", \"confidence\": 0.7}",
        );

        // Labels never pass through as arbitrary text
        assert_eq!(result.category, Category::Neutral);
        assert_eq!(result.frame, Frame::Conflict);
        assert_eq!(result.confidence, 0.7);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let result = parse_classification("{\"category\": \"NEUTRAL\", \"confidence\": 3.5}");
        assert_eq!(result.confidence, 1.0);

        let result = parse_classification("{\"category\": \"NEUTRAL\", \"confidence\": -0.2}");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_unclosed_fence_falls_back_to_whole_text() {
        let response = "```json\n{\"category\": \"JUSTIFIED\"}";
        let result = parse_classification(response);
        // The fence never closes, so the brace search runs on the full text
        assert_eq!(result.category, Category::Justified);
    }

    #[test]
    fn test_nested_braces_skip_to_inner_object() {
        // The flat-object scan never spans a nested brace
        assert_eq!(find_flat_object("{a{\"k\": 1}c}"), Some("{\"k\": 1}"));
        assert_eq!(find_flat_object("no braces"), None);
    }

    #[test]
    fn test_empty_response_fails_cleanly() {
        let result = parse_classification("");
        assert_eq!(result.reasoning, "Failed to parse response");
        assert_eq!(result.raw_text, "");
    }
}
