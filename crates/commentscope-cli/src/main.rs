//! Commentscope CLI - collect, classify, and chart YouTube comment stances.

use clap::Parser;
use commentscope_cli::commands;
use commentscope_cli::{Cli, Command, Reporter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> commentscope_cli::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let reporter = Reporter::new(!cli.no_color);

    match cli.command {
        Command::Collect(args) => commands::execute_collect(args, &reporter).await?,
        Command::Analyze(args) => commands::execute_analyze(args, &reporter).await?,
        Command::Visualize(args) => commands::execute_visualize(args, &reporter)?,
        Command::Smoke(args) => commands::execute_smoke(args, &reporter).await?,
    }

    Ok(())
}
