//! Post-enrichment data-quality gate.
//!
//! The record types make a missing column unrepresentable, so shape errors
//! die at compile time. This gate covers the runtime half of the fail-fast
//! contract: value-level corruption is rejected before aggregation or
//! reporting, with the offending row and field named. It never coerces.

use anyhow::{ensure, Result};

use crate::models::EnrichedSale;

/// Validate an enriched dataset before it feeds the downstream stages.
///
/// Per row:
/// - `unit_price` must be a positive finite number
/// - `total_revenue` must equal `quantity * unit_price` exactly (the
///   enricher derives one from the other; any drift means the dataset was
///   edited after the fact)
/// - a finite `rating` must lie on the 1–5 scale; NaN is admitted because
///   it is the documented imputation result when every raw rating was
///   missing
pub fn check_enriched(sales: &[EnrichedSale]) -> Result<()> {
    for (row, sale) in sales.iter().enumerate() {
        ensure!(
            sale.unit_price.is_finite() && sale.unit_price > 0.0,
            "row {row}: unit_price {} is not a positive finite number",
            sale.unit_price
        );

        let expected = f64::from(sale.quantity) * sale.unit_price;
        ensure!(
            sale.total_revenue == expected,
            "row {row}: total_revenue {} does not match quantity * unit_price ({expected})",
            sale.total_revenue
        );

        if sale.rating.is_finite() {
            ensure!(
                (1.0..=5.0).contains(&sale.rating),
                "row {row}: rating {} is outside the 1-5 scale",
                sale.rating
            );
        }
    }
    Ok(())
}
