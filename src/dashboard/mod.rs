//! Sales Analysis Dashboard (terminal UI)
//!
//! Interactive explorer for the sales pipeline:
//! - KPI tiles (record count, average revenue, std deviation, high-value count)
//! - Revenue-by-product bar chart and revenue histogram with average and
//!   threshold reference marks
//! - Product summary, high-value and raw-data tables
//! - CSV export with the same column conventions as the CLI runner
//!
//! Architecture mirrors the pipeline's purity: the app holds one immutable
//! `PipelineRun` snapshot and replaces it wholesale on parameter changes.

pub mod app;
pub mod renderer;
pub mod widgets;

pub use app::DashboardApp;
