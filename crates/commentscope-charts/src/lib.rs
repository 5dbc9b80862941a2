//! Commentscope Charts
//!
//! The visualization stage: reads the analyzed CSV, drops ERROR-sentinel
//! rows, aggregates label counts, and renders summary charts plus a text
//! report into a charts directory.
//!
//! Outputs:
//! - `sentiment_by_bias.png` - category counts per channel bias
//! - `framing_analysis.png` - frame counts per channel bias
//! - `sentiment_frame_heatmap.png` - category x frame count grid
//! - `summary_stats.txt` - totals, percentages, dominant labels per bias

#![warn(missing_docs)]

mod aggregate;
mod error;
mod render;
mod summary;

pub use aggregate::Aggregates;
pub use error::ChartsError;
pub use summary::summary_text;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything one visualization run produced
#[derive(Debug)]
pub struct ChartReport {
    /// Paths of the files written, in creation order
    pub files: Vec<PathBuf>,

    /// The text summary, as written to `summary_stats.txt`
    pub summary: String,

    /// Rows that survived the sentinel filter
    pub valid_rows: usize,
}

/// Run the full visualization stage
///
/// # Errors
///
/// Fails when the analyzed file cannot be read, when no substantive rows
/// remain after filtering, or when a chart cannot be rendered.
pub fn generate_charts(input: &Path, out_dir: &Path) -> Result<ChartReport, ChartsError> {
    let rows = commentscope_store::read_analyzed(input)?;
    let aggregates = Aggregates::from_rows(&rows);
    info!(
        "Loaded {} rows, {} valid after filtering",
        rows.len(),
        aggregates.total
    );

    if aggregates.total == 0 {
        return Err(ChartsError::NoData);
    }

    fs::create_dir_all(out_dir)?;

    let mut files = Vec::new();

    let path = out_dir.join("sentiment_by_bias.png");
    render::sentiment_by_bias(&aggregates, &path)?;
    files.push(path);

    let path = out_dir.join("framing_analysis.png");
    render::framing_analysis(&aggregates, &path)?;
    files.push(path);

    let path = out_dir.join("sentiment_frame_heatmap.png");
    render::sentiment_frame_heatmap(&aggregates, &path)?;
    files.push(path);

    let summary = summary_text(&aggregates);
    let path = out_dir.join("summary_stats.txt");
    fs::write(&path, &summary)?;
    files.push(path);

    Ok(ChartReport {
        files,
        summary,
        valid_rows: aggregates.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use commentscope_domain::{
        AnalyzedComment, Bias, Category, ClassificationResult, Comment, Frame,
    };
    use commentscope_store::AnalysisWriter;
    use tempfile::TempDir;

    fn write_rows(path: &Path, rows: &[(Bias, Category, Frame)]) {
        let mut writer = AnalysisWriter::open(path, false).unwrap();
        for (index, (bias, category, frame)) in rows.iter().enumerate() {
            let comment = Comment {
                comment_id: format!("c{}", index),
                body: "body".to_string(),
                source: "src".to_string(),
                bias: *bias,
                score: 0,
                date: "2026-02-01".to_string(),
                video_title: "t".to_string(),
                author: "a".to_string(),
            };
            writer
                .append(&AnalyzedComment::new(
                    comment,
                    ClassificationResult {
                        category: *category,
                        frame: *frame,
                        confidence: 0.5,
                        reasoning: String::new(),
                        raw_text: String::new(),
                    },
                ))
                .unwrap();
        }
    }

    #[test]
    fn test_generate_charts_end_to_end() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("analyzed_data.csv");
        write_rows(
            &input,
            &[
                (Bias::Left, Category::Excessive, Frame::Morality),
                (Bias::Right, Category::Justified, Frame::Legality),
                (Bias::Left, Category::Error, Frame::Error),
            ],
        );

        let out_dir = dir.path().join("charts");
        let report = generate_charts(&input, &out_dir).unwrap();

        assert_eq!(report.valid_rows, 2, "sentinel row must be dropped");
        assert_eq!(report.files.len(), 4);
        for file in &report.files {
            assert!(file.exists(), "missing output: {}", file.display());
        }
        assert!(report.summary.contains("Total comments analyzed: 2"));
    }

    #[test]
    fn test_all_sentinel_rows_is_no_data() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("analyzed_data.csv");
        write_rows(&input, &[(Bias::Left, Category::Error, Frame::Error)]);

        let result = generate_charts(&input, &dir.path().join("charts"));
        assert!(matches!(result, Err(ChartsError::NoData)));
    }
}
