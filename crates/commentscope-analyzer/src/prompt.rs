//! Classification prompt construction

/// System instruction sent with every classification request
///
/// Kept verbatim across runs: the output CSV mixes runs, so the labels must
/// come from one fixed instruction.
pub const SYSTEM_PROMPT: &str = "You are a political science researcher. Analyze the following YouTube comment regarding the Renee Good ICE shooting incident in Minneapolis. Classify it into ONE category: JUSTIFIED (supports the ICE agent's actions), EXCESSIVE (criticizes the agent's actions as excessive force), or NEUTRAL (no clear stance). Additionally, identify the dominant frame: MORALITY (ethical/moral arguments), CONFLICT (us vs them, political polarization), or LEGALITY (legal rights, constitutional arguments). Return results in a structured format (JSON).\n\nReturn ONLY valid JSON in this exact format:\n{\"category\": \"JUSTIFIED|EXCESSIVE|NEUTRAL\", \"frame\": \"MORALITY|CONFLICT|LEGALITY\", \"confidence\": 0.0-1.0, \"reasoning\": \"brief explanation\"}";

/// Build the user content for one comment, truncating the body
///
/// Truncation counts characters, not bytes, so multi-byte text is never
/// split mid-character. The stored record keeps the full body; only the
/// submitted copy is shortened.
pub fn user_content(body: &str, max_chars: usize) -> String {
    let truncated: String = body.chars().take(max_chars).collect();
    format!("Comment: {}", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_passes_through() {
        assert_eq!(user_content("hello", 1000), "Comment: hello");
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(1500);
        let content = user_content(&body, 1000);
        assert_eq!(content.len(), "Comment: ".len() + 1000);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // Each 'é' is two bytes; a byte-based cut at 3 would panic.
        let content = user_content("ééééé", 3);
        assert_eq!(content, "Comment: ééé");
    }

    #[test]
    fn test_prompt_names_every_label() {
        for label in ["JUSTIFIED", "EXCESSIVE", "NEUTRAL", "MORALITY", "CONFLICT", "LEGALITY"] {
            assert!(SYSTEM_PROMPT.contains(label));
        }
    }
}
