//! Tests for the cleaning/enrichment stage.

use chrono::NaiveDate;

use crate::models::RawSale;
use crate::pipeline::enrich::{enrich, mean_present_rating};
use crate::pipeline::generate::generate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn raw_sale(rating: Option<f64>) -> RawSale {
    RawSale {
        date: date(2025, 3, 5),
        product_id: 102,
        quantity: 2,
        unit_price: 150.0,
        rating,
    }
}

#[test]
fn test_no_missing_ratings_after_enrichment() {
    let raw = generate(100, 42, date(2025, 1, 1));
    let enriched = enrich(&raw);

    assert!(enriched.iter().all(|s| s.rating.is_finite()));
}

#[test]
fn test_revenue_is_quantity_times_price() {
    let raw = generate(50, 42, date(2025, 1, 1));
    let enriched = enrich(&raw);

    for sale in &enriched {
        assert_eq!(sale.total_revenue, f64::from(sale.quantity) * sale.unit_price);
    }
}

#[test]
fn test_imputation_broadcasts_pre_imputation_mean() {
    let raw = vec![
        raw_sale(Some(4.0)),
        raw_sale(None),
        raw_sale(Some(2.0)),
        raw_sale(None),
    ];
    let enriched = enrich(&raw);

    // Mean of the present ratings (4 and 2), not of anything imputed
    assert_eq!(mean_present_rating(&raw), 3.0);
    assert_eq!(enriched[0].rating, 4.0);
    assert_eq!(enriched[1].rating, 3.0);
    assert_eq!(enriched[2].rating, 2.0);
    assert_eq!(enriched[3].rating, 3.0);
}

#[test]
fn test_all_missing_ratings_impute_nan() {
    let raw = vec![raw_sale(None), raw_sale(None)];

    assert!(mean_present_rating(&raw).is_nan());
    let enriched = enrich(&raw);
    assert!(enriched.iter().all(|s| s.rating.is_nan()));
}

#[test]
fn test_row_count_and_order_preserved() {
    let raw = generate(30, 7, date(2025, 1, 1));
    let enriched = enrich(&raw);

    assert_eq!(enriched.len(), raw.len());
    for (before, after) in raw.iter().zip(&enriched) {
        assert_eq!(before.date, after.date);
        assert_eq!(before.product_id, after.product_id);
        assert_eq!(before.quantity, after.quantity);
        assert_eq!(before.unit_price, after.unit_price);
    }
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(enrich(&[]).is_empty());
}
