//! Revenue metrics over the enriched dataset.

use statrs::statistics::Statistics;

use crate::models::{EnrichedSale, RevenueMetrics};

/// Arithmetic mean and population standard deviation (divisor N) of the
/// `total_revenue` column.
///
/// Both values are NaN for an empty dataset; callers guard before
/// formatting or comparing. That is the specified degenerate behavior,
/// not an error.
pub fn revenue_metrics(sales: &[EnrichedSale]) -> RevenueMetrics {
    let revenues: Vec<f64> = sales.iter().map(|sale| sale.total_revenue).collect();

    RevenueMetrics {
        average: revenues.iter().mean(),
        std_dev: revenues.iter().population_std_dev(),
    }
}
