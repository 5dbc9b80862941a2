//! Visualize command implementation.

use crate::cli::VisualizeArgs;
use crate::error::{CliError, Result};
use crate::output::Reporter;
use commentscope_charts::generate_charts;

/// Execute the visualize command.
pub fn execute_visualize(args: VisualizeArgs, reporter: &Reporter) -> Result<()> {
    reporter.banner("VISUALIZATION - Generating Analysis Charts");

    if !args.input.exists() {
        return Err(CliError::InvalidInput(format!(
            "input file '{}' not found; run `commentscope analyze` first",
            args.input.display()
        )));
    }

    let report = generate_charts(&args.input, &args.out_dir)?;

    reporter.info(&format!("Valid entries after filtering: {}", report.valid_rows));
    for file in &report.files {
        reporter.info(&format!("Saved: {}", file.display()));
    }

    println!();
    println!("{}", report.summary);

    reporter.success(&format!(
        "All visualizations saved to '{}'",
        args.out_dir.display()
    ));

    Ok(())
}
