//! Comment records - the units of work flowing through the pipeline

use crate::{Bias, Category, ClassificationResult, Frame};
use serde::{Deserialize, Serialize};

/// One collected YouTube comment
///
/// `comment_id` is the identity key: unique across the corpus and stable
/// across runs, it is what resumability is computed from. All other fields
/// are carried through to the output record unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// YouTube comment-thread ID - the identity key
    pub comment_id: String,

    /// Comment text, newlines flattened to spaces at collection time
    pub body: String,

    /// Channel title the comment was collected from
    pub source: String,

    /// Channel bias tag
    pub bias: Bias,

    /// Like count at collection time
    pub score: i64,

    /// Publication date, YYYY-MM-DD
    pub date: String,

    /// Title of the video the comment was posted on
    pub video_title: String,

    /// Comment author display name
    pub author: String,
}

/// One row of the durable analysis store: a comment joined with its
/// classification
///
/// Created once per comment, appended to the store exactly once, never
/// mutated afterward. The raw model output is deliberately not a column;
/// it lives only on the in-memory [`ClassificationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedComment {
    /// Identity key, copied from the source comment
    pub comment_id: String,

    /// Full (untruncated) comment text
    pub body: String,

    /// Channel title
    pub source: String,

    /// Channel bias tag
    pub bias: Bias,

    /// Like count
    pub score: i64,

    /// Publication date, YYYY-MM-DD
    pub date: String,

    /// Video title
    pub video_title: String,

    /// Author display name
    pub author: String,

    /// Stance label
    pub category: Category,

    /// Frame label
    pub frame: Frame,

    /// Classification confidence in [0.0, 1.0]
    pub confidence: f64,

    /// Model's explanation, or the failure reason for sentinel rows
    pub reasoning: String,
}

impl AnalyzedComment {
    /// Join a comment with its classification result
    pub fn new(comment: Comment, result: ClassificationResult) -> Self {
        Self {
            comment_id: comment.comment_id,
            body: comment.body,
            source: comment.source,
            bias: comment.bias,
            score: comment.score,
            date: comment.date,
            video_title: comment.video_title,
            author: comment.author,
            category: result.category,
            frame: result.frame,
            confidence: result.confidence,
            reasoning: result.reasoning,
        }
    }

    /// Whether both labels are substantive (row usable for aggregation)
    pub fn is_substantive(&self) -> bool {
        self.category.is_substantive() && self.frame.is_substantive()
    }
}
