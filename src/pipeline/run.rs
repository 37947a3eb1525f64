//! One-shot pipeline orchestration.
//!
//! Composes the four stages in dependency order and bundles every artifact
//! of the run. Both front ends go through here.

use tracing::info;

use crate::models::{EnrichedSale, PipelineParams, ProductSummary, RawSale, RevenueMetrics};
use crate::pipeline::{aggregate, detect, enrich, generate, metrics};

/// All artifacts of a single pipeline run.
///
/// Everything is derived fresh from the seed; nothing mutates after
/// construction.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub params: PipelineParams,
    pub raw: Vec<RawSale>,
    pub enriched: Vec<EnrichedSale>,
    pub summary: Vec<ProductSummary>,
    pub metrics: RevenueMetrics,
    pub high_value: Vec<EnrichedSale>,
}

impl PipelineRun {
    /// Run generate → enrich → aggregate → metrics → detect.
    pub fn execute(params: PipelineParams) -> Self {
        let raw = generate::generate(params.size, params.seed, params.start_date);
        let enriched = enrich::enrich(&raw);
        let summary = aggregate::aggregate(&enriched);
        let metrics = metrics::revenue_metrics(&enriched);
        let high_value = detect::detect_high_value(&enriched, &metrics);

        info!(
            rows = enriched.len(),
            products = summary.len(),
            high_value = high_value.len(),
            "pipeline run complete"
        );

        Self {
            params,
            raw,
            enriched,
            summary,
            metrics,
            high_value,
        }
    }
}
