//! Error types for the report pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that can occur while turning a sales CSV into a PDF report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The input CSV does not exist. The orchestrator recovers from this
    /// by writing a sample dataset; it is never fatal on its own.
    #[error("data file not found at '{}'", .0.display())]
    DataNotFound(PathBuf),

    /// A required column is absent from the CSV header.
    #[error("required column '{0}' is missing from the input header")]
    MissingColumn(&'static str),

    /// The input parsed cleanly but contains no data rows.
    #[error("input contains no data rows")]
    EmptyTable,

    /// A malformed row or other CSV-level failure.
    #[error("failed to read sales data: {0}")]
    Csv(#[from] csv::Error),

    /// Chart rendering failed. Plotters backend errors are generic over
    /// the backend, so the message is flattened here.
    #[error("failed to render chart: {0}")]
    Chart(String),

    /// Document construction or serialization failed. Chart image decode
    /// failures surface here as well, wrapped by the document layer.
    #[error("failed to build report document: {0}")]
    Pdf(#[from] genpdf::error::Error),

    /// File system failure outside the CSV/PDF layers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
