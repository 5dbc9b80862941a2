//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::output::Reporter;
use commentscope_analyzer::{AnalyzerConfig, BatchRunner, Classifier};
use commentscope_llm::GroqProvider;
use std::fs;

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, reporter: &Reporter) -> Result<()> {
    reporter.banner("COMMENT ANALYSIS - Groq Classification Pipeline");

    if !args.input.exists() {
        return Err(CliError::InvalidInput(format!(
            "input file '{}' not found; run `commentscope collect` first",
            args.input.display()
        )));
    }

    let mut config = match args.config {
        Some(path) => {
            let toml_str = fs::read_to_string(path)?;
            AnalyzerConfig::from_toml(&toml_str).map_err(CliError::Config)?
        }
        None => AnalyzerConfig::default(),
    };
    if let Some(model) = args.model {
        config.model = model;
    }

    let provider = GroqProvider::new(args.api_key)?;
    let classifier = Classifier::new(provider, config.clone());
    let runner = BatchRunner::new(classifier, config);

    let summary = runner.run(&args.input, &args.output).await?;

    if summary.skipped > 0 {
        reporter.info(&format!(
            "Resumed: {} comments were already processed",
            summary.skipped
        ));
    }
    reporter.info(&format!(
        "Processed {} of {} comments",
        summary.processed, summary.total
    ));
    if summary.failures > 0 {
        reporter.warning(&format!(
            "{} comments recorded with ERROR sentinels",
            summary.failures
        ));
    }

    reporter.success(&format!(
        "Analysis complete; results saved to {}",
        args.output.display()
    ));
    reporter.info("Next step: run `commentscope visualize`");

    Ok(())
}
