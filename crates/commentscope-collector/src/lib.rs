//! Commentscope Collector
//!
//! Gathers YouTube comments on the topic through the YouTube Data API v3:
//! a fixed query list finds videos, each video's top comment threads are
//! listed, and every kept comment is tagged with its channel's bias before
//! landing in `raw_data.csv`.
//!
//! The output schema is the `Comment` record from `commentscope-domain`;
//! the analyzer consumes the file as-is.

#![warn(missing_docs)]

mod channels;
mod collect;
mod error;
mod youtube;

pub use channels::{bias_for_channel, CHANNEL_CATEGORIES};
pub use collect::{bias_counts, collect_comments, CollectOptions, SEARCH_QUERIES};
pub use error::CollectorError;
pub use youtube::{CommentThread, VideoHit, YouTubeClient};
