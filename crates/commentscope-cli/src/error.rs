//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// LLM provider error
    #[error(transparent)]
    Llm(#[from] commentscope_llm::LlmError),

    /// Collection stage error
    #[error(transparent)]
    Collector(#[from] commentscope_collector::CollectorError),

    /// Analysis stage error
    #[error(transparent)]
    Analyzer(#[from] commentscope_analyzer::AnalyzerError),

    /// Visualization stage error
    #[error(transparent)]
    Charts(#[from] commentscope_charts::ChartsError),

    /// Storage error
    #[error(transparent)]
    Store(#[from] commentscope_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
