//! Error types for the charts crate

use thiserror::Error;

/// Errors that can occur while generating charts
#[derive(Error, Debug)]
pub enum ChartsError {
    /// Analyzed file could not be read
    #[error("Store error: {0}")]
    Store(#[from] commentscope_store::StoreError),

    /// Charts directory or summary file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart backend failure
    #[error("Render error: {0}")]
    Render(String),

    /// Nothing to plot after dropping sentinel rows
    #[error("No valid rows to visualize")]
    NoData,
}
