//! Cleaning and enrichment stage.
//!
//! Fills missing ratings with the dataset-wide mean of the present ratings
//! and derives the per-row `total_revenue` column. Pure: the raw input is
//! left untouched and a freshly allocated dataset comes back, same row
//! count, same order.

use tracing::debug;

use crate::models::{EnrichedSale, RawSale};

/// Mean of the ratings that are present in the raw dataset.
///
/// NaN when every rating is missing; the imputation then broadcasts NaN,
/// which is the documented degenerate behavior rather than an error.
pub fn mean_present_rating(raw: &[RawSale]) -> f64 {
    let mut sum = 0.0;
    let mut present = 0usize;
    for sale in raw {
        if let Some(rating) = sale.rating {
            sum += rating;
            present += 1;
        }
    }
    sum / present as f64
}

/// Impute missing ratings and derive `total_revenue` for every row.
///
/// The imputation value is computed once, before any replacement, and the
/// same scalar is broadcast to every missing row.
pub fn enrich(raw: &[RawSale]) -> Vec<EnrichedSale> {
    let fill = mean_present_rating(raw);

    let enriched: Vec<EnrichedSale> = raw
        .iter()
        .map(|sale| EnrichedSale {
            date: sale.date,
            product_id: sale.product_id,
            quantity: sale.quantity,
            unit_price: sale.unit_price,
            rating: sale.rating.unwrap_or(fill),
            total_revenue: f64::from(sale.quantity) * sale.unit_price,
        })
        .collect();

    debug!(rows = enriched.len(), fill_rating = fill, "enriched dataset");
    enriched
}
