//! Summary statistics over a loaded sales table.

use log::debug;

use crate::data::{SalesRecord, SalesTable};
use crate::error::{ReportError, Result};

/// Revenue totals grouped by product category.
///
/// Categories keep the order in which they first appear in the table so
/// the chart and any listings match the source data's encounter order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryRevenue {
    entries: Vec<(String, f64)>,
}

impl CategoryRevenue {
    /// Adds revenue to a category, inserting it at the end on first sight.
    fn add(&mut self, category: &str, revenue: f64) {
        match self
            .entries
            .iter_mut()
            .find(|(name, _)| name == category)
        {
            Some((_, total)) => *total += revenue,
            None => self.entries.push((category.to_owned(), revenue)),
        }
    }

    /// Iterates `(category, total revenue)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total revenue for a single category, if present.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    /// Sum across all categories.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, total)| total).sum()
    }

    /// The largest per-category total, used for chart axis scaling.
    pub fn max_revenue(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, total)| *total)
            .fold(0.0, f64::max)
    }
}

/// Human-readable key metrics derived from the dataset, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    entries: Vec<(String, String)>,
}

impl Summary {
    fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.entries.push((label.into(), value.into()));
    }

    /// Iterates `(label, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), value.as_str()))
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| value.as_str())
    }
}

/// Results of analyzing one sales table.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub summary: Summary,
    pub category_revenue: CategoryRevenue,
    /// Index of the best-selling record in the source table.
    pub best_seller: usize,
}

/// Computes totals, per-category revenue, and the best-selling record.
///
/// The best seller is the record with the maximum Units Sold; the first
/// such record wins ties. An empty table has no best seller and is
/// rejected with [`ReportError::EmptyTable`].
pub fn analyze(table: &SalesTable) -> Result<Analysis> {
    let records = table.records();
    if records.is_empty() {
        return Err(ReportError::EmptyTable);
    }

    let mut total_revenue = 0.0;
    let mut total_units: u64 = 0;
    let mut category_revenue = CategoryRevenue::default();
    let mut best_seller = 0;

    for (index, record) in records.iter().enumerate() {
        total_revenue += record.revenue;
        total_units += record.units_sold;
        category_revenue.add(&record.category, record.revenue);
        // strictly greater keeps the first record on ties
        if record.units_sold > records[best_seller].units_sold {
            best_seller = index;
        }
    }

    debug!(
        "analyzed {} records: revenue={total_revenue}, units={total_units}, categories={}",
        records.len(),
        category_revenue.len()
    );

    let mut summary = Summary::default();
    summary.push("Total Revenue", format_currency(total_revenue));
    summary.push("Total Units Sold", group_thousands(&total_units.to_string()));
    summary.push(
        "Best Selling Product (Units)",
        describe_best_seller(&records[best_seller]),
    );

    Ok(Analysis {
        summary,
        category_revenue,
        best_seller,
    })
}

fn describe_best_seller(record: &SalesRecord) -> String {
    format!("{} ({} units)", record.product, record.units_sold)
}

/// Formats a non-negative amount as `$1,234,567.89`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = (cents % 100).abs();
    format!("${}.{:02}", group_thousands(&whole.to_string()), fraction)
}

/// Inserts `,` separators every three digits, leaving a sign untouched.
fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, ch) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(product: &str, category: &str, units: u64, revenue: f64) -> SalesRecord {
        SalesRecord {
            date: "2023-01-15".to_owned(),
            product: product.to_owned(),
            category: category.to_owned(),
            units_sold: units,
            revenue,
        }
    }

    fn sample_table() -> SalesTable {
        SalesTable::from_records(vec![
            record("Laptop", "Electronics", 50, 45000.0),
            record("Smartphone", "Electronics", 120, 60000.0),
        ])
    }

    #[test]
    fn documented_sample_metrics() {
        let analysis = analyze(&sample_table()).unwrap();

        assert_eq!(analysis.summary.get("Total Revenue"), Some("$105,000.00"));
        assert_eq!(analysis.summary.get("Total Units Sold"), Some("170"));
        assert_eq!(
            analysis.summary.get("Best Selling Product (Units)"),
            Some("Smartphone (120 units)")
        );
        assert_eq!(analysis.category_revenue.get("Electronics"), Some(105000.0));
        assert_eq!(analysis.category_revenue.len(), 1);
    }

    #[test]
    fn summary_preserves_insertion_order() {
        let analysis = analyze(&sample_table()).unwrap();
        let labels: Vec<&str> = analysis.summary.iter().map(|(label, _)| label).collect();
        assert_eq!(
            labels,
            [
                "Total Revenue",
                "Total Units Sold",
                "Best Selling Product (Units)"
            ]
        );
    }

    #[test]
    fn category_totals_sum_to_total_revenue() {
        let table = SalesTable::from_records(vec![
            record("Laptop", "Electronics", 50, 45000.0),
            record("Desk", "Furniture", 10, 3000.0),
            record("Smartphone", "Electronics", 120, 60000.0),
            record("Chair", "Furniture", 25, 1250.0),
        ]);

        let analysis = analyze(&table).unwrap();
        let total: f64 = table.records().iter().map(|r| r.revenue).sum();
        assert!((analysis.category_revenue.total() - total).abs() < 1e-9);
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let table = SalesTable::from_records(vec![
            record("Desk", "Furniture", 10, 3000.0),
            record("Laptop", "Electronics", 50, 45000.0),
            record("Chair", "Furniture", 25, 1250.0),
        ]);

        let analysis = analyze(&table).unwrap();
        let names: Vec<&str> = analysis.category_revenue.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Furniture", "Electronics"]);
        assert_eq!(analysis.category_revenue.get("Furniture"), Some(4250.0));
    }

    #[test]
    fn best_seller_dominates_and_first_wins_ties() {
        let table = SalesTable::from_records(vec![
            record("Desk", "Furniture", 120, 3000.0),
            record("Laptop", "Electronics", 50, 45000.0),
            record("Smartphone", "Electronics", 120, 60000.0),
        ]);

        let analysis = analyze(&table).unwrap();
        let best = &table.records()[analysis.best_seller];
        assert!(table
            .records()
            .iter()
            .all(|record| record.units_sold <= best.units_sold));
        // Desk ties Smartphone at 120 units but appears first.
        assert_eq!(best.product, "Desk");
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = analyze(&SalesTable::default()).unwrap_err();
        assert!(matches!(err, ReportError::EmptyTable));
    }

    #[test]
    fn currency_formatting_groups_thousands() {
        assert_eq!(format_currency(105000.0), "$105,000.00");
        assert_eq!(format_currency(0.5), "$0.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(999.0), "$999.00");
    }
}
