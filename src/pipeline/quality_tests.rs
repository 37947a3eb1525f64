//! Tests for the data-quality gate.

use chrono::NaiveDate;

use crate::models::RawSale;
use crate::pipeline::enrich::enrich;
use crate::pipeline::generate::generate;
use crate::pipeline::quality::check_enriched;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_pipeline_output_passes_the_gate() {
    let enriched = enrich(&generate(100, 42, date(2025, 1, 1)));
    assert!(check_enriched(&enriched).is_ok());
}

#[test]
fn test_empty_dataset_passes_the_gate() {
    assert!(check_enriched(&[]).is_ok());
}

#[test]
fn test_corrupted_revenue_is_rejected_with_row_named() {
    let mut enriched = enrich(&generate(10, 42, date(2025, 1, 1)));
    enriched[3].total_revenue += 0.5;

    let err = check_enriched(&enriched).unwrap_err().to_string();
    assert!(err.contains("row 3"), "error must name the row: {err}");
    assert!(err.contains("total_revenue"), "error must name the field: {err}");
}

#[test]
fn test_out_of_scale_rating_is_rejected() {
    let mut enriched = enrich(&generate(10, 42, date(2025, 1, 1)));
    enriched[0].rating = 7.0;

    let err = check_enriched(&enriched).unwrap_err().to_string();
    assert!(err.contains("rating"), "error must name the field: {err}");
}

#[test]
fn test_nan_ratings_from_all_missing_input_are_admitted() {
    // The documented degenerate case: no rating present anywhere, the
    // imputed value is NaN and flows through rather than erroring
    let raw: Vec<RawSale> = (0..4)
        .map(|i| RawSale {
            date: date(2025, 1, 1 + i),
            product_id: 101,
            quantity: 2,
            unit_price: 180.0,
            rating: None,
        })
        .collect();

    let enriched = enrich(&raw);
    assert!(enriched.iter().all(|s| s.rating.is_nan()));
    assert!(check_enriched(&enriched).is_ok());
}
