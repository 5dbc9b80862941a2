//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Commentscope - collect, classify, and chart YouTube comment stances.
#[derive(Debug, Parser)]
#[command(name = "commentscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands - the three pipeline stages plus the smoke test.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect YouTube comments into the raw CSV
    Collect(CollectArgs),

    /// Classify collected comments through the Groq API
    Analyze(AnalyzeArgs),

    /// Render charts and a text summary from analyzed data
    Visualize(VisualizeArgs),

    /// Verify the Groq credential and the classification prompt
    Smoke(SmokeArgs),
}

/// Arguments for the collect command.
#[derive(Debug, Parser)]
pub struct CollectArgs {
    /// YouTube Data API v3 key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Output CSV path
    #[arg(short, long, default_value = "raw_data.csv")]
    pub output: PathBuf,

    /// Videos fetched per search query
    #[arg(long, default_value_t = 50)]
    pub max_videos: u32,

    /// Comment threads fetched per video
    #[arg(long, default_value_t = 100)]
    pub max_comments: u32,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Input CSV produced by the collect command
    #[arg(short, long, default_value = "raw_data.csv")]
    pub input: PathBuf,

    /// Output CSV; doubles as the resume checkpoint
    #[arg(short, long, default_value = "analyzed_data.csv")]
    pub output: PathBuf,

    /// Model identifier override
    #[arg(long)]
    pub model: Option<String>,

    /// TOML file with analyzer settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the visualize command.
#[derive(Debug, Parser)]
pub struct VisualizeArgs {
    /// Analyzed CSV path
    #[arg(short, long, default_value = "analyzed_data.csv")]
    pub input: PathBuf,

    /// Directory the charts are written into
    #[arg(short, long, default_value = "charts")]
    pub out_dir: PathBuf,
}

/// Arguments for the smoke command.
#[derive(Debug, Parser)]
pub struct SmokeArgs {
    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model identifier override
    #[arg(long)]
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from(["commentscope", "analyze", "--api-key", "gsk_test"]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.input, PathBuf::from("raw_data.csv"));
                assert_eq!(args.output, PathBuf::from("analyzed_data.csv"));
                assert!(args.model.is_none());
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_collect_limits() {
        let cli = Cli::parse_from([
            "commentscope",
            "collect",
            "--api-key",
            "yt_test",
            "--max-videos",
            "5",
            "--max-comments",
            "10",
        ]);
        match cli.command {
            Command::Collect(args) => {
                assert_eq!(args.max_videos, 5);
                assert_eq!(args.max_comments, 10);
            }
            _ => panic!("Expected Collect command"),
        }
    }

    #[test]
    fn test_visualize_out_dir() {
        let cli = Cli::parse_from(["commentscope", "visualize", "--out-dir", "figures"]);
        match cli.command {
            Command::Visualize(args) => assert_eq!(args.out_dir, PathBuf::from("figures")),
            _ => panic!("Expected Visualize command"),
        }
    }
}
