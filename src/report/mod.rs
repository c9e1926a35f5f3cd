//! Report composition: lays out the summary, chart, and data table into a
//! paginated PDF document.

pub mod builder;
pub mod figure;
pub mod style;

use std::path::Path;

use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::{style::Style, Alignment, Element, Margins};
use log::info;

use crate::analysis::Summary;
use crate::data::SalesTable;
use crate::error::Result;
use crate::report::builder::DocumentBuilder;
use crate::report::figure::ScaledImage;
use crate::report::style::ReportStyle;

/// Running header shown on every page.
const PAGE_HEADER: &str = "Corporate Report";
/// Title line on the first page.
const REPORT_TITLE: &str = "Quarterly Sales Analysis Report";

/// A4 paper width; the table column arithmetic follows the full paper
/// width, not the text area.
const PAGE_WIDTH_MM: f64 = 210.0;
/// Height reserved for the running footer.
const FOOTER_HEIGHT_MM: f64 = 12.0;

/// Builds the complete report document without serializing it.
pub fn build_document(
    table: &SalesTable,
    summary: &Summary,
    chart_path: &Path,
    style: &ReportStyle,
) -> Result<genpdf::Document> {
    let style = *style;

    let header_style = Style::new().bold().with_font_size(style.page_header_size);
    let footer_style = Style::new().italic().with_font_size(style.page_footer_size);
    let title_style = Style::new().bold().with_font_size(style.title_size);
    let heading_style = Style::new().bold().with_font_size(style.heading_size);
    let body_style = Style::new().with_font_size(style.body_size);

    let mut document = DocumentBuilder::new()
        .with_paper_size(genpdf::PaperSize::A4)
        .with_margins(style.margins())
        .with_header(move |_page| {
            Paragraph::new(PAGE_HEADER)
                .aligned(Alignment::Center)
                .styled(header_style)
                .padded(Margins::trbl(0.0, 0.0, 6.0, 0.0))
        })
        .with_footer(FOOTER_HEIGHT_MM, move |page| {
            Paragraph::new(format!("Page {page}"))
                .aligned(Alignment::Center)
                .styled(footer_style)
        })
        .build()?;

    document.push(
        Paragraph::new(REPORT_TITLE)
            .aligned(Alignment::Center)
            .styled(title_style)
            .padded(Margins::trbl(0.0, 0.0, 3.0, 0.0)),
    );

    document.push(Paragraph::new("1. Executive Summary").styled(heading_style));
    document.push(Break::new(0.5));
    for (label, value) in summary.iter() {
        document.push(Paragraph::new(format!("- {label}: {value}")).styled(body_style));
    }
    document.push(Break::new(1.5));

    document.push(Paragraph::new("2. Revenue by Category Visualization").styled(heading_style));
    document.push(Break::new(0.5));
    document.push(
        ScaledImage::from_path(chart_path)?
            .with_width(genpdf::Mm::from(style.chart_width_mm))
            .with_alignment(Alignment::Center),
    );
    document.push(Break::new(1.5));

    document.push(Paragraph::new("3. Detailed Sales Data").styled(heading_style));
    document.push(Break::new(0.5));
    document.push(data_table(table, &style)?);

    Ok(document)
}

/// The bordered data table: one header row, one row per record.
///
/// Column width follows the source convention of paper width divided by
/// (column count + 1), so the table occupies n/(n+1) of the page; the
/// leftover width becomes right padding instead of wider columns. Row
/// overflow onto following pages is handled by the pagination engine.
fn data_table(table: &SalesTable, style: &ReportStyle) -> Result<impl Element> {
    let columns = table.columns();
    let column_count = columns.len();

    let table_header_style = Style::new().bold().with_font_size(style.table_header_size);
    let table_body_style = Style::new().with_font_size(style.table_body_size);
    let cell_padding = Margins::trbl(1.0, 1.0, 1.0, 1.0);

    let mut layout = TableLayout::new(vec![1; column_count]);
    layout.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    let mut header_row = layout.row();
    for column in columns {
        header_row.push_element(
            Paragraph::new(*column)
                .aligned(Alignment::Center)
                .styled(table_header_style)
                .padded(cell_padding),
        );
    }
    header_row.push()?;

    for record in table.records() {
        let mut row = layout.row();
        for cell in record.cells() {
            row.push_element(
                Paragraph::new(cell)
                    .aligned(Alignment::Center)
                    .styled(table_body_style)
                    .padded(cell_padding),
            );
        }
        row.push()?;
    }

    let column_width = PAGE_WIDTH_MM / (column_count as f64 + 1.0);
    let (_, right, _, left) = style.margins_mm;
    let text_width = PAGE_WIDTH_MM - left - right;
    let leftover = (text_width - column_width * column_count as f64).max(0.0);

    Ok(layout.padded(Margins::trbl(0.0, leftover, 0.0, 0.0)))
}

/// Composes the report and writes it to `output_path`.
///
/// Prints the confirmation line the tool's console contract documents.
pub fn compose_report(
    table: &SalesTable,
    summary: &Summary,
    chart_path: &Path,
    output_path: &Path,
    style: &ReportStyle,
) -> Result<()> {
    let document = build_document(table, summary, chart_path, style)?;
    document.render_to_file(output_path)?;
    info!("composed report at {}", output_path.display());
    println!("Report successfully generated at: {}", output_path.display());
    Ok(())
}

/// Renders the report into memory. Used by the rendering tests.
pub fn render_report_bytes(
    table: &SalesTable,
    summary: &Summary,
    chart_path: &Path,
    style: &ReportStyle,
) -> Result<Vec<u8>> {
    let document = build_document(table, summary, chart_path, style)?;
    let mut bytes = Vec::new();
    document.render(&mut bytes)?;
    Ok(bytes)
}
