//! High-value transaction detection.
//!
//! A pure filter over the enriched dataset: keep the rows whose revenue
//! strictly exceeds the high-value threshold (average plus population
//! standard deviation).

use tracing::debug;

use crate::models::{EnrichedSale, RevenueMetrics};

/// Rows with `total_revenue > metrics.threshold()`.
///
/// All columns and the original row order are preserved. The result owns
/// independent copies, so mutating it never affects the source dataset.
pub fn detect_high_value(sales: &[EnrichedSale], metrics: &RevenueMetrics) -> Vec<EnrichedSale> {
    let threshold = metrics.threshold();

    let flagged: Vec<EnrichedSale> = sales
        .iter()
        .filter(|sale| sale.total_revenue > threshold)
        .cloned()
        .collect();

    debug!(
        threshold,
        flagged = flagged.len(),
        scanned = sales.len(),
        "high-value scan"
    );
    flagged
}
