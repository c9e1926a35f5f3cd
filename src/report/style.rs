//! Styling configuration for the report composer.

use genpdf::Margins;

/// Font sizes and layout constants used throughout the report.
///
/// Styling is process-wide convention rather than shared mutable state:
/// callers construct one value (usually [`ReportStyle::default`]) and pass
/// it into the composer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReportStyle {
    /// Main title on the first page.
    pub title_size: u8,
    /// Section headings ("1. Executive Summary", ...).
    pub heading_size: u8,
    /// Summary body lines.
    pub body_size: u8,
    /// Table header row.
    pub table_header_size: u8,
    /// Table data rows.
    pub table_body_size: u8,
    /// Running page header.
    pub page_header_size: u8,
    /// Running page footer.
    pub page_footer_size: u8,
    /// Page margins in millimetres (top, right, bottom, left).
    pub margins_mm: (f64, f64, f64, f64),
    /// Width of the embedded chart image in millimetres.
    pub chart_width_mm: f64,
}

impl ReportStyle {
    pub fn margins(&self) -> Margins {
        let (top, right, bottom, left) = self.margins_mm;
        Margins::trbl(top, right, bottom, left)
    }
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            title_size: 24,
            heading_size: 16,
            body_size: 11,
            table_header_size: 10,
            table_body_size: 9,
            page_header_size: 12,
            page_footer_size: 8,
            margins_mm: (10.0, 10.0, 15.0, 10.0),
            chart_width_mm: 160.0,
        }
    }
}
