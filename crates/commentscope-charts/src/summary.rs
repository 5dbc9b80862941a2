//! Text summary generation

use crate::aggregate::Aggregates;
use commentscope_domain::{Category, Frame};
use std::fmt::Write;

/// Render the aggregate counts as the `summary_stats.txt` report
pub fn summary_text(aggregates: &Aggregates) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "ANALYSIS SUMMARY - Renee Good ICE Shooting (YouTube)");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "\nTotal comments analyzed: {}", aggregates.total);

    let _ = writeln!(out, "\n--- SENTIMENT DISTRIBUTION ---");
    for category in Category::substantive() {
        let count = aggregates.category_total(category);
        let _ = writeln!(
            out,
            "  {}: {} ({:.1}%)",
            category,
            count,
            percentage(count, aggregates.total)
        );
    }

    let _ = writeln!(out, "\n--- FRAMING DISTRIBUTION ---");
    for frame in Frame::substantive() {
        let count = aggregates.frame_total(frame);
        let _ = writeln!(
            out,
            "  {}: {} ({:.1}%)",
            frame,
            count,
            percentage(count, aggregates.total)
        );
    }

    let _ = writeln!(out, "\n--- BY CHANNEL BIAS ---");
    for bias in &aggregates.biases {
        let _ = writeln!(
            out,
            "\n{} channels (n={}):",
            bias,
            aggregates.bias_total(*bias)
        );
        let sentiment = aggregates
            .dominant_category(*bias)
            .map(|c| c.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let frame = aggregates
            .dominant_frame(*bias)
            .map(|f| f.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let _ = writeln!(out, "  Dominant sentiment: {}", sentiment);
        let _ = writeln!(out, "  Dominant frame: {}", frame);
    }

    out
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
