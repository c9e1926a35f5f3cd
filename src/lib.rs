//! Sales report generation: CSV in, paginated PDF out.
//!
//! The library is a linear pipeline: load ([`data`]), aggregate
//! ([`analysis`]), plot ([`chart`]), then compose ([`report`]). The
//! stages are sequenced by [`pipeline::run`], which also handles the
//! missing-input case and the cleanup of the intermediate chart image.

pub mod analysis;
pub mod chart;
pub mod data;
pub mod error;
pub mod fonts;
pub mod pipeline;
pub mod report;

pub use error::{ReportError, Result};
