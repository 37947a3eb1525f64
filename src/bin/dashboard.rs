//! Interactive Sales Analysis Dashboard
//!
//! Terminal front end over the sales pipeline. Takes the same three
//! generation parameters as the CLI runner and explores the results
//! interactively; parameters can be adjusted live and both CSV artifacts
//! exported with the `e` key.
//!
//! ```bash
//! cargo run --bin sales_dashboard -- --size 200 --seed 7
//! ```

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;

use salescope::dashboard::{renderer, DashboardApp};
use salescope::models::PipelineParams;

/// Interactive explorer for the synthetic sales pipeline.
#[derive(Parser, Debug)]
#[command(name = "sales_dashboard")]
#[command(about = "Interactive dashboard for the synthetic sales pipeline")]
struct Cli {
    /// Number of rows to generate
    #[arg(long, default_value_t = 100)]
    size: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Date of the first transaction (YYYY-MM-DD)
    #[arg(long, default_value = "2025-01-01")]
    start_date: NaiveDate,

    /// Directory for CSV exports triggered from the dashboard
    #[arg(long, default_value = "outputs")]
    export_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let params = PipelineParams {
        size: cli.size,
        seed: cli.seed,
        start_date: cli.start_date,
    };
    let mut app = DashboardApp::new(params, cli.export_dir);

    let mut terminal = renderer::init_terminal()?;
    // Restore the terminal before surfacing any loop error
    let result = renderer::run_event_loop(&mut terminal, &mut app);
    renderer::restore_terminal(&mut terminal)?;
    result?;
    Ok(())
}
