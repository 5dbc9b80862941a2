//! Error types for the collector

use thiserror::Error;

/// Errors that can occur while collecting comments
#[derive(Error, Debug)]
pub enum CollectorError {
    /// Client misconfiguration (missing credential)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
