//! Tests for the per-product aggregation stage.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::EnrichedSale;
use crate::pipeline::aggregate::aggregate;
use crate::pipeline::enrich::enrich;
use crate::pipeline::generate::generate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sale(product_id: u32, quantity: u32, unit_price: f64, rating: f64) -> EnrichedSale {
    EnrichedSale {
        date: date(2025, 1, 1),
        product_id,
        quantity,
        unit_price,
        rating,
        total_revenue: f64::from(quantity) * unit_price,
    }
}

#[test]
fn test_summary_sorted_ascending_and_unique() {
    let enriched = enrich(&generate(120, 99, date(2025, 1, 1)));
    let summary = aggregate(&enriched);

    for pair in summary.windows(2) {
        assert!(pair[0].product_id < pair[1].product_id);
    }
}

#[test]
fn test_one_row_per_distinct_product() {
    let enriched = enrich(&generate(120, 99, date(2025, 1, 1)));
    let summary = aggregate(&enriched);

    let distinct: BTreeSet<u32> = enriched.iter().map(|s| s.product_id).collect();
    assert_eq!(summary.len(), distinct.len());
    assert!(summary.len() <= 5, "only five product ids exist");
}

#[test]
fn test_quantity_is_row_count_not_unit_sum() {
    // Three transactions for product 100 totaling 21 units: the summary
    // quantity must be 3 (row count), never 21
    let enriched = vec![
        sale(100, 5, 120.0, 4.0),
        sale(100, 7, 130.0, 2.0),
        sale(100, 9, 140.0, 3.0),
        sale(103, 1, 200.0, 5.0),
    ];
    let summary = aggregate(&enriched);

    assert_eq!(summary[0].product_id, 100);
    assert_eq!(summary[0].quantity, 3);
    assert_eq!(summary[1].product_id, 103);
    assert_eq!(summary[1].quantity, 1);
}

#[test]
fn test_group_rating_is_arithmetic_mean() {
    let enriched = vec![sale(104, 1, 100.0, 2.0), sale(104, 1, 100.0, 4.0)];
    let summary = aggregate(&enriched);

    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].rating, 3.0);
}

#[test]
fn test_aggregation_conserves_total_revenue() {
    let enriched = enrich(&generate(250, 9, date(2025, 1, 1)));
    let summary = aggregate(&enriched);

    let direct: f64 = enriched.iter().map(|s| s.total_revenue).sum();
    let grouped: f64 = summary.iter().map(|p| p.total_revenue).sum();
    assert!(
        (direct - grouped).abs() <= 1e-6 * direct.abs(),
        "grouping must conserve total revenue: {direct} vs {grouped}"
    );
}

#[test]
fn test_stable_across_identical_runs() {
    let first = aggregate(&enrich(&generate(120, 99, date(2025, 1, 1))));
    let second = aggregate(&enrich(&generate(120, 99, date(2025, 1, 1))));

    assert_eq!(first, second);
}

#[test]
fn test_empty_input_yields_empty_summary() {
    assert!(aggregate(&[]).is_empty());
}
