//! Commentscope Analyzer
//!
//! Classifies collected comments through an LLM and records the results in
//! the durable CSV store.
//!
//! # Overview
//!
//! The analyzer is the middle stage of the pipeline. It reads the raw
//! comment file, classifies each comment's stance and framing through a
//! chat-completion call, and appends one row per comment to the analyzed
//! file, flushing after every row.
//!
//! # Architecture
//!
//! ```text
//! raw_data.csv → BatchRunner → Classifier → LLM → parser → analyzed_data.csv
//! ```
//!
//! # Key Features
//!
//! - **Resumable batches**: the output file doubles as the checkpoint;
//!   already-recorded comment IDs are skipped on restart
//! - **Bounded retry with backoff**: rate limits wait on a linear,
//!   attempt-scaled schedule; other failures back off exponentially; both
//!   share one retry ceiling
//! - **Defensive parsing**: free-form model output is reduced to the fixed
//!   label sets, never passed through verbatim
//!
//! # Example Usage
//!
//! ```no_run
//! use commentscope_analyzer::{AnalyzerConfig, BatchRunner, Classifier};
//! use commentscope_llm::GroqProvider;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = GroqProvider::new(std::env::var("GROQ_API_KEY")?)?;
//! let config = AnalyzerConfig::default();
//!
//! let classifier = Classifier::new(provider, config.clone());
//! let runner = BatchRunner::new(classifier, config);
//!
//! let summary = runner
//!     .run(Path::new("raw_data.csv"), Path::new("analyzed_data.csv"))
//!     .await?;
//!
//! println!("Processed {} comments", summary.processed);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod classifier;
mod config;
mod error;
mod parser;
mod prompt;
mod runner;

pub use classifier::Classifier;
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use parser::parse_classification;
pub use prompt::SYSTEM_PROMPT;
pub use runner::{BatchRunner, RunSummary};
