//! Loading sales data from CSV and synthesizing the sample dataset.

use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Column names expected in the input header, in file order.
pub const COLUMNS: [&str; 5] = ["Date", "Product", "Category", "Units Sold", "Revenue"];

/// Rows written by [`write_sample_csv`] when no input file exists.
const SAMPLE_ROWS: [[&str; 5]; 2] = [
    ["2023-01-15", "Laptop", "Electronics", "50", "45000"],
    ["2023-01-17", "Smartphone", "Electronics", "120", "60000"],
];

/// One row of sales data. Immutable once loaded; rows carry no identity
/// beyond their position in the table.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SalesRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Units Sold")]
    pub units_sold: u64,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
}

impl SalesRecord {
    /// The record's fields as display strings, in [`COLUMNS`] order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.date.clone(),
            self.product.clone(),
            self.category.clone(),
            self.units_sold.to_string(),
            self.revenue.to_string(),
        ]
    }
}

/// An ordered, in-memory sales table for the duration of one run.
#[derive(Clone, Debug, Default)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    /// Reads a comma-delimited file with a header row into a table.
    ///
    /// Returns [`ReportError::DataNotFound`] when the path does not exist
    /// and [`ReportError::MissingColumn`] when the header lacks one of the
    /// required columns. Malformed rows propagate as CSV errors.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ReportError::DataNotFound(path.to_path_buf()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        for column in COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(ReportError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }

        info!("loaded {} sales records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    /// Builds a table directly from records. Used by tests and callers
    /// that already hold parsed data.
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names for the table, in file order.
    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }
}

/// Writes the two-row sample dataset used when no input file is present.
///
/// The file carries the documented header and two fixed rows, so a re-run
/// can consume it directly.
pub fn write_sample_csv(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COLUMNS)?;
    for row in SAMPLE_ROWS {
        writer.write_record(row)?;
    }
    writer.flush()?;
    debug!("wrote sample dataset to {}", path.display());
    Ok(())
}
