//! Error types for the Analyzer

use thiserror::Error;

/// Errors that can abort an analysis run
///
/// Per-item classification failures never appear here - they are recorded
/// as ERROR-sentinel rows and the batch continues. A run only fails when
/// the input file or the durable store cannot be used at all.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Input file or durable store could not be opened/read/written
    #[error("Store error: {0}")]
    Store(#[from] commentscope_store::StoreError),

    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),
}
