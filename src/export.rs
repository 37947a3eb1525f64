//! CSV serialization and the plain-text run summary.
//!
//! Both front ends write the same two artifacts: the cleaned transactions
//! and the per-product report. Columns and formatting are part of the
//! contract: header row first, no index column, dates as `YYYY-MM-DD`,
//! floats in shortest round-trip form, missing values as empty fields.

use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{EnrichedSale, ProductSummary};
use crate::pipeline::run::PipelineRun;

pub const TRANSACTIONS_HEADER: &str = "date,product_id,quantity,unit_price,rating,total_revenue";
pub const REPORT_HEADER: &str = "product_id,total_revenue,rating,quantity";

/// Format a float cell; NaN serializes as an empty field.
fn float_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Write the enriched transactions as CSV.
pub fn write_transactions<W: Write>(mut out: W, sales: &[EnrichedSale]) -> Result<()> {
    writeln!(out, "{TRANSACTIONS_HEADER}")?;
    for sale in sales {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            sale.date.format("%Y-%m-%d"),
            sale.product_id,
            sale.quantity,
            float_cell(sale.unit_price),
            float_cell(sale.rating),
            float_cell(sale.total_revenue),
        )?;
    }
    Ok(())
}

/// Write the per-product report as CSV.
pub fn write_report<W: Write>(mut out: W, summary: &[ProductSummary]) -> Result<()> {
    writeln!(out, "{REPORT_HEADER}")?;
    for row in summary {
        writeln!(
            out,
            "{},{},{},{}",
            row.product_id,
            float_cell(row.total_revenue),
            float_cell(row.rating),
            row.quantity,
        )?;
    }
    Ok(())
}

fn to_path<F>(path: &Path, write_body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }
    }

    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_body(&mut out)?;
    out.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

/// Write the transactions CSV at `path`, creating parent directories.
pub fn write_transactions_file(path: &Path, sales: &[EnrichedSale]) -> Result<()> {
    to_path(path, |out| write_transactions(out, sales))
}

/// Write the report CSV at `path`, creating parent directories.
pub fn write_report_file(path: &Path, summary: &[ProductSummary]) -> Result<()> {
    to_path(path, |out| write_report(out, summary))
}

/// Human-readable run summary printed by the CLI.
pub fn render_summary(run: &PipelineRun) -> String {
    let mut out = String::new();

    // Infallible: writing to a String never errors.
    let _ = writeln!(out, "--- Sales Summary ---");
    let _ = writeln!(
        out,
        "{:>10}  {:>14}  {:>7}  {:>8}",
        "product_id", "total_revenue", "rating", "quantity"
    );
    for row in &run.summary {
        let _ = writeln!(
            out,
            "{:>10}  {:>14.2}  {:>7.2}  {:>8}",
            row.product_id, row.total_revenue, row.rating, row.quantity
        );
    }

    if run.enriched.is_empty() {
        // Metrics over an empty dataset are undefined; say so instead of
        // printing NaN scalars.
        let _ = writeln!(out, "\nNo transactions generated; revenue metrics undefined.");
    } else {
        let _ = writeln!(
            out,
            "\nAvg Revenue: {:.2} | Std Dev: {:.2}",
            run.metrics.average, run.metrics.std_dev
        );
        let _ = writeln!(out, "High Value Transactions: {}", run.high_value.len());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PipelineParams, ProductSummary};
    use crate::pipeline::run::PipelineRun;
    use chrono::NaiveDate;

    fn sample_sale(rating: f64) -> EnrichedSale {
        EnrichedSale {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            product_id: 101,
            quantity: 3,
            unit_price: 250.0,
            rating,
            total_revenue: 750.0,
        }
    }

    #[test]
    fn transactions_csv_header_and_rows() {
        let sales = vec![sample_sale(4.0), sample_sale(2.5)];
        let mut buf = Vec::new();
        write_transactions(&mut buf, &sales).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], TRANSACTIONS_HEADER);
        assert_eq!(lines[1], "2025-01-01,101,3,250,4,750");
    }

    #[test]
    fn nan_rating_writes_empty_field() {
        let sales = vec![sample_sale(f64::NAN)];
        let mut buf = Vec::new();
        write_transactions(&mut buf, &sales).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().nth(1).unwrap().contains(",250,,750"));
    }

    #[test]
    fn report_csv_header_and_row_count_semantics() {
        let summary = vec![ProductSummary {
            product_id: 100,
            total_revenue: 1234.5,
            rating: 3.25,
            quantity: 7,
        }];
        let mut buf = Vec::new();
        write_report(&mut buf, &summary).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], REPORT_HEADER);
        assert_eq!(lines[1], "100,1234.5,3.25,7");
    }

    #[test]
    fn summary_text_mentions_scalars_and_high_value_count() {
        let run = PipelineRun::execute(PipelineParams::default());
        let text = render_summary(&run);

        assert!(text.contains("Sales Summary"));
        assert!(text.contains("Avg Revenue:"));
        assert!(text.contains("High Value Transactions:"));
    }

    #[test]
    fn summary_text_guards_empty_dataset() {
        let run = PipelineRun::execute(PipelineParams {
            size: 0,
            ..PipelineParams::default()
        });
        let text = render_summary(&run);

        assert!(text.contains("revenue metrics undefined"));
        assert!(!text.contains("NaN"));
    }
}
