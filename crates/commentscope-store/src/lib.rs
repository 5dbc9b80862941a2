//! Commentscope Storage Layer
//!
//! Flat CSV files are both the inter-stage interchange format and the
//! durable resumability checkpoint:
//!
//! - `raw_data.csv`: collector output, analyzer input (one `Comment` per row)
//! - `analyzed_data.csv`: analyzer output, append-only, flushed per row
//!   (one `AnalyzedComment` per row)
//!
//! The analyzed file doubles as the checkpoint: on startup the analyzer
//! scans it for already-present comment IDs and skips those items, so an
//! interrupted run never loses completed work and never re-sends a
//! completed item.
//!
//! # Examples
//!
//! ```no_run
//! use commentscope_store::{load_processed_ids, read_comments};
//! use std::path::Path;
//!
//! let comments = read_comments(Path::new("raw_data.csv")).unwrap();
//! let processed = load_processed_ids(Path::new("analyzed_data.csv")).unwrap();
//! let pending = comments
//!     .iter()
//!     .filter(|c| !processed.contains(&c.comment_id));
//! # let _ = pending;
//! ```

#![warn(missing_docs)]

mod input;
mod output;

pub use input::{read_comments, write_comments};
pub use output::{load_processed_ids, read_analyzed, AnalysisWriter};

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// File could not be opened or created
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the file involved
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl StoreError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
