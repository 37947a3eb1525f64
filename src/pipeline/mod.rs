//! Sales Data Pipeline
//!
//! Four pure, stateless stages composed by plain data hand-off:
//!
//! ```text
//! Generator (seed, size, start date)
//!    ↓ Vec<RawSale>
//! Cleaner/Enricher (mean-impute ratings, derive revenue)
//!    ↓ Vec<EnrichedSale>
//! Aggregator (per-product roll-up)        Revenue Metrics (mean, pop. std)
//!    ↓ Vec<ProductSummary>                   ↓ RevenueMetrics
//!                          High-Value Detector
//!                             ↓ Vec<EnrichedSale>
//! ```
//!
//! # Design Principles
//!
//! 1. **Deterministic generation**: one locally scoped ChaCha8 stream keyed
//!    solely by the seed; no process-global RNG state anywhere.
//! 2. **Immutable hand-off**: every stage borrows its input and returns a
//!    freshly allocated output; nothing mutates after creation.
//! 3. **NaN propagation over invention**: the two degenerate cases (every
//!    rating missing, empty dataset fed to metrics) produce NaN, exactly as
//!    the statistics define it, instead of made-up fallback values.
//! 4. **Fail fast on corruption**: the quality gate rejects structurally
//!    bad datasets with the offending row and field named; it never coerces.

pub mod aggregate;
pub mod detect;
pub mod enrich;
pub mod generate;
pub mod metrics;
pub mod quality;
pub mod run;

#[cfg(test)]
mod aggregate_tests;
#[cfg(test)]
mod enrich_tests;
#[cfg(test)]
mod generate_tests;
#[cfg(test)]
mod quality_tests;

// Re-exports for convenience
pub use aggregate::aggregate;
pub use detect::detect_high_value;
pub use enrich::{enrich, mean_present_rating};
pub use generate::{generate, SalesRng};
pub use metrics::revenue_metrics;
pub use quality::check_enriched;
pub use run::PipelineRun;
