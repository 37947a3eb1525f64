use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A raw synthetic sale as emitted by the generator.
///
/// `rating` is `None` when the customer left no rating; the enrichment stage
/// fills it in. Raw records never carry a revenue figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSale {
    pub date: NaiveDate,
    pub product_id: u32,
    pub quantity: u32,
    pub unit_price: f64,
    pub rating: Option<f64>,
}

/// A cleaned and enriched sale: rating imputed, revenue derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSale {
    pub date: NaiveDate,
    pub product_id: u32,
    pub quantity: u32,
    pub unit_price: f64,
    /// Original rating, or the dataset-wide mean of the present ratings when
    /// the raw record had none. NaN only when every raw rating was missing.
    pub rating: f64,
    /// `quantity * unit_price`, computed per row during enrichment.
    pub total_revenue: f64,
}

/// Per-product roll-up of the enriched dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product_id: u32,
    /// Sum of `total_revenue` over the group.
    pub total_revenue: f64,
    /// Arithmetic mean of the (already imputed) per-row ratings.
    pub rating: f64,
    /// CAUTION: this is the number of TRANSACTIONS in the group, not the sum
    /// of units sold. The column name is a quirk inherited from the original
    /// aggregation and is part of the report CSV contract; do not "fix" it.
    pub quantity: usize,
}

/// Mean and population standard deviation of the revenue column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenueMetrics {
    pub average: f64,
    /// Population standard deviation (divisor N, not N-1).
    pub std_dev: f64,
}

impl RevenueMetrics {
    /// The high-value cutoff: rows strictly above this are flagged.
    pub fn threshold(&self) -> f64 {
        self.average + self.std_dev
    }
}

/// Generation parameters shared by the CLI runner and the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Number of rows to generate; one transaction per calendar day.
    pub size: usize,
    /// Seed for the generator's local RNG. Same seed + size reproduces the
    /// dataset exactly.
    pub seed: u64,
    /// Date of the first transaction.
    pub start_date: NaiveDate,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            size: 100,
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }
}
