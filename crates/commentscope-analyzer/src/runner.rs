//! Resumable batch runner over the comment corpus

use crate::classifier::Classifier;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use commentscope_domain::traits::LlmProvider;
use commentscope_domain::{AnalyzedComment, Comment};
use commentscope_store::{load_processed_ids, read_comments, AnalysisWriter};
use std::path::Path;
use tracing::{debug, info};

/// Counts reported by a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Comments in the input file
    pub total: usize,

    /// Comments skipped because the store already had their IDs
    pub skipped: usize,

    /// Comments classified and appended this run
    pub processed: usize,

    /// Of those processed, how many ended as ERROR-sentinel rows
    pub failures: usize,
}

/// Drives the classifier over every comment not yet in the durable store
///
/// Each completed comment is appended and flushed before the next one
/// starts, so the output file is always a valid checkpoint: restarting
/// after an interruption resumes from exactly the first unprocessed
/// comment, classifying nothing twice and skipping nothing.
pub struct BatchRunner<L>
where
    L: LlmProvider,
{
    classifier: Classifier<L>,
    config: AnalyzerConfig,
}

impl<L> BatchRunner<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Send + 'static,
{
    /// Create a new runner around a classifier
    pub fn new(classifier: Classifier<L>, config: AnalyzerConfig) -> Self {
        Self { classifier, config }
    }

    /// Process the input file against the durable store
    ///
    /// # Errors
    ///
    /// Fails only when the configuration is invalid or the input/store
    /// files cannot be used. Per-comment classification failures are
    /// recorded as sentinel rows and never abort the run.
    pub async fn run(&self, input: &Path, output: &Path) -> Result<RunSummary, AnalyzerError> {
        self.config.validate().map_err(AnalyzerError::Config)?;

        let comments = read_comments(input)?;
        let total = comments.len();
        info!("Loaded {} comments from {}", total, input.display());

        let processed_ids = load_processed_ids(output)?;
        if !processed_ids.is_empty() {
            info!(
                "Resuming: {} comments already processed",
                processed_ids.len()
            );
        }

        let resume = !processed_ids.is_empty();
        let mut writer = AnalysisWriter::open(output, resume)?;

        let pending: Vec<Comment> = comments
            .into_iter()
            .filter(|c| !processed_ids.contains(&c.comment_id))
            .collect();
        let skipped = total - pending.len();
        let to_process = pending.len();

        info!("Processing {} comments", to_process);

        let mut failures = 0;
        for (index, comment) in pending.into_iter().enumerate() {
            debug!(
                "[{}/{}] {} ({}): {:.50}",
                index + 1,
                to_process,
                comment.source,
                comment.bias,
                comment.body
            );

            let result = self.classifier.classify(&comment).await;
            if !result.is_substantive() {
                failures += 1;
            }
            debug!(
                "-> {} | {} | conf: {}",
                result.category, result.frame, result.confidence
            );

            writer.append(&AnalyzedComment::new(comment, result))?;

            // Proactive pacing, independent of the retry backoff
            tokio::time::sleep(self.config.item_delay()).await;
        }

        info!(
            "Analysis complete: {} processed, {} skipped, {} failures",
            to_process, skipped, failures
        );

        Ok(RunSummary {
            total,
            skipped,
            processed: to_process,
            failures,
        })
    }
}
