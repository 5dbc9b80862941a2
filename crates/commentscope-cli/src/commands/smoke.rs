//! Smoke command implementation.
//!
//! De-risk step: proves the credential and the classification prompt work
//! before a full collection run spends API quota.

use crate::cli::SmokeArgs;
use crate::error::Result;
use crate::output::Reporter;
use commentscope_analyzer::{AnalyzerConfig, SYSTEM_PROMPT};
use commentscope_domain::traits::CompletionRequest;
use commentscope_llm::GroqProvider;

/// Fixed sample comments spanning the expected label space.
const SAMPLE_COMMENTS: [&str; 5] = [
    "The agent was clearly acting in self-defense. Anyone would do the same in that situation.",
    "This is murder plain and simple. ICE has no accountability.",
    "I don't know enough about this case to form an opinion yet. Need more facts.",
    "The law is clear - federal agents have the right to protect themselves. This was justified legally.",
    "This is a moral tragedy. An innocent person lost their life.",
];

/// Execute the smoke command.
pub async fn execute_smoke(args: SmokeArgs, reporter: &Reporter) -> Result<()> {
    reporter.banner("SMOKE TEST - Groq Connectivity and Prompt Check");

    let provider = GroqProvider::new(args.api_key)?;
    reporter.success("Groq client initialized");

    let config = AnalyzerConfig::default();
    let model = args.model.unwrap_or(config.model);

    for (index, comment) in SAMPLE_COMMENTS.iter().enumerate() {
        reporter.info(&format!("--- Test {}/{} ---", index + 1, SAMPLE_COMMENTS.len()));
        reporter.info(&format!("Comment: {:.80}", comment));

        let request = CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            user: format!("Comment: {}", comment),
            model: model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_output_tokens,
        };

        // First failure aborts: a smoke test that half-passes is a fail.
        let response = provider.complete(&request).await?;
        reporter.info(&format!("Result: {}\n", response));
    }

    reporter.success("All smoke tests passed - API connection and prompt are working");
    Ok(())
}
