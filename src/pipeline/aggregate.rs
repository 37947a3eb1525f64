//! Per-product aggregation stage.

use std::collections::BTreeMap;

use crate::models::{EnrichedSale, ProductSummary};

#[derive(Default)]
struct GroupAccumulator {
    revenue: f64,
    rating_sum: f64,
    rows: usize,
}

/// Group the enriched dataset by `product_id`.
///
/// One summary row per distinct product id present in the input, ascending
/// by id. The summary `quantity` counts rows in the group; it does not sum
/// the per-row quantities (see [`ProductSummary::quantity`]).
///
/// Zero input rows yield zero summary rows.
pub fn aggregate(sales: &[EnrichedSale]) -> Vec<ProductSummary> {
    // BTreeMap keeps group iteration deterministic and already ascending.
    let mut groups: BTreeMap<u32, GroupAccumulator> = BTreeMap::new();

    for sale in sales {
        let group = groups.entry(sale.product_id).or_default();
        group.revenue += sale.total_revenue;
        group.rating_sum += sale.rating;
        group.rows += 1;
    }

    groups
        .into_iter()
        .map(|(product_id, group)| ProductSummary {
            product_id,
            total_revenue: group.revenue,
            rating: group.rating_sum / group.rows as f64,
            quantity: group.rows,
        })
        .collect()
}
