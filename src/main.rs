//! Sales Analysis Pipeline Runner
//!
//! Generates the synthetic dataset, cleans and enriches it, aggregates
//! per-product metrics, flags high-value transactions, writes the two CSV
//! artifacts and prints a summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin salescope -- \
//!   --size 100 --seed 42 --start-date 2025-01-01 \
//!   --report-path outputs/report.csv \
//!   --transactions-path outputs/transactions.csv
//! ```
//!
//! Exit code 0 on success; any parameter, pipeline or I/O failure exits
//! non-zero with the error message and no partial output beyond the file
//! being written at the time.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salescope::export;
use salescope::models::{PipelineParams, ProductSummary, RevenueMetrics};
use salescope::pipeline::{check_enriched, PipelineRun};

/// Run the synthetic sales analysis pipeline.
#[derive(Parser, Debug)]
#[command(name = "salescope")]
#[command(about = "Run the synthetic sales analysis pipeline")]
struct Cli {
    /// Number of rows to generate
    #[arg(long, default_value_t = 100)]
    size: usize,

    /// Random seed; same seed and size reproduce the dataset exactly
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Date of the first transaction (YYYY-MM-DD), one row per day from here
    #[arg(long, default_value = "2025-01-01")]
    start_date: NaiveDate,

    /// Output path for the product summary report CSV
    #[arg(long, default_value = "outputs/report.csv")]
    report_path: PathBuf,

    /// Output path for the cleaned transactions CSV
    #[arg(long, default_value = "outputs/transactions.csv")]
    transactions_path: PathBuf,

    /// Optional machine-readable run summary (JSON)
    #[arg(long)]
    summary_json: Option<PathBuf>,
}

/// Machine-readable counterpart of the stdout summary.
#[derive(Serialize)]
struct RunSummary<'a> {
    params: PipelineParams,
    record_count: usize,
    metrics: RevenueMetrics,
    high_value_count: usize,
    products: &'a [ProductSummary],
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let params = PipelineParams {
        size: cli.size,
        seed: cli.seed,
        start_date: cli.start_date,
    };

    let run = PipelineRun::execute(params);
    check_enriched(&run.enriched)?;

    export::write_report_file(&cli.report_path, &run.summary)?;
    export::write_transactions_file(&cli.transactions_path, &run.enriched)?;
    info!(
        report = %cli.report_path.display(),
        transactions = %cli.transactions_path.display(),
        "wrote CSV artifacts"
    );

    print!("{}", export::render_summary(&run));

    if let Some(path) = &cli.summary_json {
        let summary = RunSummary {
            params,
            record_count: run.enriched.len(),
            metrics: run.metrics,
            high_value_count: run.high_value.len(),
            products: &run.summary,
        };
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &summary)?;
        info!(path = %path.display(), "wrote run summary JSON");
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salescope=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
