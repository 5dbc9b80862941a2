//! Collect command implementation.

use crate::cli::CollectArgs;
use crate::error::{CliError, Result};
use crate::output::Reporter;
use commentscope_collector::{bias_counts, collect_comments, CollectOptions, YouTubeClient};

/// Execute the collect command.
pub async fn execute_collect(args: CollectArgs, reporter: &Reporter) -> Result<()> {
    reporter.banner("YOUTUBE DATA COLLECTION");

    let client = YouTubeClient::new(args.api_key)?;
    let options = CollectOptions {
        max_videos_per_query: args.max_videos,
        max_comments_per_video: args.max_comments,
    };

    let comments = collect_comments(&client, &options).await?;
    if comments.is_empty() {
        return Err(CliError::InvalidInput(
            "no comments collected; check the API key and quota".to_string(),
        ));
    }

    reporter.info(&format!("Total unique comments: {}", comments.len()));
    for (bias, count) in bias_counts(&comments) {
        reporter.info(&format!("  {}: {} comments", bias, count));
    }

    commentscope_store::write_comments(&args.output, &comments)?;
    reporter.success(&format!(
        "Saved {} comments to {}",
        comments.len(),
        args.output.display()
    ));
    reporter.info("Next step: run `commentscope analyze`");

    Ok(())
}
