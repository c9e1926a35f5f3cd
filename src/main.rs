use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use sales_report::pipeline::{self, RunPaths};

/// Generates a paginated sales analysis PDF from a CSV dataset.
///
/// When the input file does not exist, a two-row sample dataset is
/// written in its place and the run stops; run the tool again to produce
/// the report from it.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the input sales CSV.
    #[arg(long, default_value = pipeline::DEFAULT_INPUT)]
    input: PathBuf,

    /// Path for the intermediate chart image (deleted after composition).
    #[arg(long, default_value = pipeline::DEFAULT_CHART)]
    chart: PathBuf,

    /// Path for the generated PDF report.
    #[arg(long, default_value = pipeline::DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let paths = RunPaths {
        input: cli.input,
        chart: cli.chart,
        output: cli.output,
    };

    if let Err(err) = pipeline::run(&paths) {
        eprintln!("Error: {err}");
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {source}");
        error = source;
    }
}
