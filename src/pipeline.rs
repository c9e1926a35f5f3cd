//! The end-to-end run: check input, load, analyze, render, compose, clean
//! up. Each stage hands its output to the next; nothing is shared.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::analysis::analyze;
use crate::chart::render_bar_chart;
use crate::data::{write_sample_csv, SalesTable};
use crate::error::{ReportError, Result};
use crate::report::compose_report;
use crate::report::style::ReportStyle;

/// Default relative path of the input dataset.
pub const DEFAULT_INPUT: &str = "sales_data.csv";
/// Default relative path of the intermediate chart image.
pub const DEFAULT_CHART: &str = "revenue_chart.png";
/// Default relative path of the output document.
pub const DEFAULT_OUTPUT: &str = "Sample_Report.pdf";

/// File locations for one run.
#[derive(Clone, Debug)]
pub struct RunPaths {
    pub input: PathBuf,
    pub chart: PathBuf,
    pub output: PathBuf,
}

impl Default for RunPaths {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            chart: PathBuf::from(DEFAULT_CHART),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Which terminal state a run reached. Both are normal terminations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The input was missing; a sample dataset was written instead of a
    /// report and the run stopped.
    SampleWritten(PathBuf),
    /// The report was generated at the contained path.
    ReportWritten(PathBuf),
}

/// Deletes the intermediate chart image when dropped.
///
/// Created right after the chart is rendered so the file is removed on
/// every exit from the compose stage, success or failure.
struct ChartArtifact<'a> {
    path: &'a Path,
}

impl Drop for ChartArtifact<'_> {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(self.path) {
            warn!(
                "failed to remove intermediate chart {}: {err}",
                self.path.display()
            );
        }
    }
}

/// Runs the pipeline with the default styling.
pub fn run(paths: &RunPaths) -> Result<RunOutcome> {
    run_with_style(paths, &ReportStyle::default())
}

/// Runs the pipeline: `CheckInput`, then either the sample-synthesis stop
/// or the full load → analyze → render → compose → cleanup sequence.
pub fn run_with_style(paths: &RunPaths, style: &ReportStyle) -> Result<RunOutcome> {
    let table = match SalesTable::from_csv_path(&paths.input) {
        Ok(table) => table,
        Err(ReportError::DataNotFound(input)) => {
            warn!("no input data at {}", input.display());
            println!("Error: Data file not found at '{}'", input.display());
            write_sample_csv(&paths.input)?;
            println!(
                "A sample '{}' has been created. Please run the script again.",
                paths.input.display()
            );
            return Ok(RunOutcome::SampleWritten(paths.input.clone()));
        }
        Err(err) => return Err(err),
    };

    let analysis = analyze(&table)?;

    render_bar_chart(&analysis.category_revenue, &paths.chart)?;
    let chart = ChartArtifact { path: &paths.chart };

    compose_report(&table, &analysis.summary, chart.path, &paths.output, style)?;

    drop(chart);
    info!("run complete: {}", paths.output.display());
    Ok(RunOutcome::ReportWritten(paths.output.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_writes_sample_and_stops() {
        let dir = tempfile::tempdir().unwrap();
        let paths = RunPaths {
            input: dir.path().join("sales_data.csv"),
            chart: dir.path().join("revenue_chart.png"),
            output: dir.path().join("Sample_Report.pdf"),
        };

        let outcome = run(&paths).unwrap();
        assert_eq!(outcome, RunOutcome::SampleWritten(paths.input.clone()));
        assert!(paths.input.exists());
        assert!(!paths.chart.exists());
        assert!(!paths.output.exists());
    }

    #[test]
    fn chart_artifact_removes_file_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        fs::write(&path, b"png bytes").unwrap();

        {
            let _guard = ChartArtifact { path: &path };
        }
        assert!(!path.exists());
    }
}
