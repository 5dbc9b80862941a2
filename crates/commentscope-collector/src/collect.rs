//! Collection orchestration: queries → videos → comments → records

use crate::channels::bias_for_channel;
use crate::error::CollectorError;
use crate::youtube::{CommentThread, VideoHit, YouTubeClient};
use commentscope_domain::{Bias, Comment};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// Fixed search queries for the topic
pub const SEARCH_QUERIES: [&str; 4] = [
    "Renee Good ICE",
    "Minneapolis ICE shooting",
    "ICE agent Minneapolis",
    "Renee Good shooting",
];

/// Only videos published after this instant are considered
const PUBLISHED_AFTER: &str = "2026-01-01T00:00:00Z";

/// Comments shorter than this are discarded as noise
const MIN_BODY_CHARS: usize = 20;

/// Knobs for one collection run
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Videos fetched per search query
    pub max_videos_per_query: u32,

    /// Comment threads fetched per video
    pub max_comments_per_video: u32,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            max_videos_per_query: 50,
            max_comments_per_video: 100,
        }
    }
}

/// Collect comments across all search queries
///
/// Videos and comments are deduplicated by ID across queries. A failed
/// search or comment listing is logged and skipped; the run keeps going
/// with whatever the other queries return.
pub async fn collect_comments(
    client: &YouTubeClient,
    options: &CollectOptions,
) -> Result<Vec<Comment>, CollectorError> {
    let mut comments = Vec::new();
    let mut seen_videos = HashSet::new();
    let mut seen_comments = HashSet::new();

    for query in SEARCH_QUERIES {
        info!("Searching: {:?}", query);

        let videos = match client
            .search_videos(query, PUBLISHED_AFTER, options.max_videos_per_query)
            .await
        {
            Ok(videos) => videos,
            Err(e) => {
                warn!("Search error for {:?}: {}", query, e);
                continue;
            }
        };
        info!("Found {} videos", videos.len());

        for video in videos {
            if !seen_videos.insert(video.video_id.clone()) {
                continue;
            }

            let bias = bias_for_channel(&video.channel_title);
            info!(
                "{} ({}): {:.50}",
                video.channel_title, bias, video.title
            );

            let threads = match client
                .list_comments(&video.video_id, options.max_comments_per_video)
                .await
            {
                Ok(threads) => threads,
                Err(e) => {
                    warn!("Comment fetch error on {}: {}", video.video_id, e);
                    continue;
                }
            };

            let mut kept = 0;
            for thread in threads {
                if !seen_comments.insert(thread.comment_id.clone()) {
                    continue;
                }
                if thread.body.chars().count() < MIN_BODY_CHARS {
                    continue;
                }
                comments.push(to_comment(&video, thread, bias));
                kept += 1;
            }
            info!("-> {} comments collected", kept);
        }
    }

    Ok(comments)
}

/// Per-bias comment counts, largest group first
pub fn bias_counts(comments: &[Comment]) -> Vec<(Bias, usize)> {
    let mut counts: HashMap<Bias, usize> = HashMap::new();
    for comment in comments {
        *counts.entry(comment.bias).or_insert(0) += 1;
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    counts
}

/// Build the stored record for one kept comment
fn to_comment(video: &VideoHit, thread: CommentThread, bias: Bias) -> Comment {
    Comment {
        comment_id: thread.comment_id,
        body: thread.body,
        source: video.channel_title.clone(),
        bias,
        score: thread.likes,
        date: thread.published_at.chars().take(10).collect(),
        video_title: video.title.clone(),
        author: thread.author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> VideoHit {
        VideoHit {
            video_id: "vid1".to_string(),
            title: "Coverage".to_string(),
            channel_title: "CNN".to_string(),
            published_at: "2026-01-10T12:00:00Z".to_string(),
        }
    }

    fn thread(id: &str) -> CommentThread {
        CommentThread {
            comment_id: id.to_string(),
            body: "a sufficiently long comment body".to_string(),
            author: "viewer".to_string(),
            likes: 4,
            published_at: "2026-01-11T08:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_to_comment_truncates_date() {
        let comment = to_comment(&video(), thread("t1"), Bias::Left);
        assert_eq!(comment.date, "2026-01-11");
        assert_eq!(comment.source, "CNN");
        assert_eq!(comment.score, 4);
    }

    #[test]
    fn test_bias_counts_sorted_descending() {
        let mut comments = Vec::new();
        for i in 0..3 {
            let mut c = to_comment(&video(), thread(&format!("l{}", i)), Bias::Left);
            c.bias = Bias::Left;
            comments.push(c);
        }
        comments.push(to_comment(&video(), thread("r0"), Bias::Right));

        let counts = bias_counts(&comments);
        assert_eq!(counts[0], (Bias::Left, 3));
        assert_eq!(counts[1], (Bias::Right, 1));
    }

    #[test]
    fn test_default_options() {
        let options = CollectOptions::default();
        assert_eq!(options.max_videos_per_query, 50);
        assert_eq!(options.max_comments_per_video, 100);
    }
}
