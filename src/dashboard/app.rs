//! Dashboard application state and rendering.
//!
//! Holds the current generation parameters and the artifacts of the latest
//! pipeline run; every parameter change re-runs the pipeline (it is cheap
//! and fully deterministic).

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, Tabs},
    Frame,
};

use super::widgets::{
    revenue_bar_chart, MetricTile, RevenueHistogram, ACCENT_CYAN, ACCENT_GREEN, ACCENT_PURPLE,
    ACCENT_RED, ACCENT_YELLOW, BORDER_DIM, TEXT_BRIGHT, TEXT_DIM,
};
use crate::export;
use crate::models::{EnrichedSale, PipelineParams};
use crate::pipeline::run::PipelineRun;

/// Tab views in the dashboard.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Products,
    HighValue,
    RawData,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Overview, Tab::Products, Tab::HighValue, Tab::RawData]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "OVERVIEW",
            Tab::Products => "PRODUCTS",
            Tab::HighValue => "HIGH VALUE",
            Tab::RawData => "RAW DATA",
        }
    }
}

/// Application state.
pub struct DashboardApp {
    pub running: bool,
    pub current_tab: Tab,
    pub params: PipelineParams,
    pub run: PipelineRun,
    pub export_dir: PathBuf,
    pub scroll: usize,
    pub status: Option<String>,
    pub show_help: bool,
}

impl DashboardApp {
    pub fn new(params: PipelineParams, export_dir: PathBuf) -> Self {
        Self {
            running: true,
            current_tab: Tab::Overview,
            params,
            run: PipelineRun::execute(params),
            export_dir,
            scroll: 0,
            status: None,
            show_help: false,
        }
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::Tab | KeyCode::Right => self.next_tab(),
            KeyCode::BackTab | KeyCode::Left => self.prev_tab(),
            KeyCode::Char('1') => self.select_tab(Tab::Overview),
            KeyCode::Char('2') => self.select_tab(Tab::Products),
            KeyCode::Char('3') => self.select_tab(Tab::HighValue),
            KeyCode::Char('4') => self.select_tab(Tab::RawData),
            KeyCode::Char('r') => self.rerun("re-ran pipeline"),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.params.size += 10;
                self.rerun("size +10");
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.params.size = self.params.size.saturating_sub(10);
                self.rerun("size -10");
            }
            KeyCode::Char('s') => {
                self.params.seed += 1;
                self.rerun("seed +1");
            }
            KeyCode::Char('S') => {
                self.params.seed = self.params.seed.saturating_sub(1);
                self.rerun("seed -1");
            }
            KeyCode::Char('e') => self.export_csv(),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll += 1,
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(20),
            KeyCode::PageDown => self.scroll += 20,
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.scroll = 0;
    }

    fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs
            .iter()
            .position(|t| *t == self.current_tab)
            .unwrap_or(0);
        self.select_tab(tabs[(idx + 1) % tabs.len()]);
    }

    fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs
            .iter()
            .position(|t| *t == self.current_tab)
            .unwrap_or(0);
        self.select_tab(tabs[(idx + tabs.len() - 1) % tabs.len()]);
    }

    fn rerun(&mut self, cause: &str) {
        self.run = PipelineRun::execute(self.params);
        self.scroll = 0;
        self.status = Some(format!(
            "{cause}: size={} seed={}",
            self.params.size, self.params.seed
        ));
    }

    /// Write both CSV artifacts into the export directory.
    fn export_csv(&mut self) {
        let transactions = self.export_dir.join("transactions.csv");
        let report = self.export_dir.join("report.csv");

        let result = export::write_transactions_file(&transactions, &self.run.enriched)
            .and_then(|_| export::write_report_file(&report, &self.run.summary));

        self.status = Some(match result {
            Ok(()) => format!("exported {}", self.export_dir.display()),
            Err(e) => format!("export failed: {e:#}"),
        });
    }

    /// Render the application.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(10),   // Content
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_content(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);

        if self.show_help {
            self.render_help(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<_> = Tab::all()
            .iter()
            .map(|t| Line::from(format!(" {} ", t.title())))
            .collect();

        let idx = Tab::all()
            .iter()
            .position(|t| *t == self.current_tab)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .title(" SALES ANALYSIS DASHBOARD ")
                    .title_style(
                        Style::default()
                            .fg(ACCENT_CYAN)
                            .add_modifier(Modifier::BOLD),
                    )
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER_DIM)),
            )
            .select(idx)
            .style(Style::default().fg(TEXT_DIM))
            .highlight_style(
                Style::default()
                    .fg(ACCENT_CYAN)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::UNDERLINED),
            );

        frame.render_widget(tabs, area);
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        match self.current_tab {
            Tab::Overview => self.render_overview(frame, area),
            Tab::Products => self.render_products(frame, area),
            Tab::HighValue => self.render_high_value(frame, area),
            Tab::RawData => self.render_raw(frame, area),
        }
    }

    fn render_overview(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(8)])
            .split(area);

        self.render_kpis(frame, rows[0]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        // Bar chart wants borrowed labels; keep them alive for the render
        let labels: Vec<String> = self
            .run
            .summary
            .iter()
            .map(|p| p.product_id.to_string())
            .collect();
        let data: Vec<(&str, u64)> = self
            .run
            .summary
            .iter()
            .zip(labels.iter())
            .map(|(p, label)| (label.as_str(), p.total_revenue.max(0.0) as u64))
            .collect();
        let bar_width = (charts[0].width.saturating_sub(2) / 6).clamp(3, 9);
        frame.render_widget(revenue_bar_chart(&data, bar_width), charts[0]);

        let revenues: Vec<f64> = self
            .run
            .enriched
            .iter()
            .map(|s| s.total_revenue)
            .collect();
        frame.render_widget(
            RevenueHistogram::new(
                &revenues,
                self.run.metrics.average,
                self.run.metrics.threshold(),
            ),
            charts[1],
        );
    }

    fn render_kpis(&self, frame: &mut Frame, area: Rect) {
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let empty = self.run.enriched.is_empty();
        let scalar = |v: f64| {
            if empty {
                "n/a".to_string()
            } else {
                format!("${v:.2}")
            }
        };

        frame.render_widget(
            MetricTile::new(
                "TOTAL RECORDS",
                self.run.enriched.len().to_string(),
                TEXT_BRIGHT,
            ),
            tiles[0],
        );
        frame.render_widget(
            MetricTile::new("AVG REVENUE", scalar(self.run.metrics.average), ACCENT_GREEN),
            tiles[1],
        );
        frame.render_widget(
            MetricTile::new("STD DEVIATION", scalar(self.run.metrics.std_dev), ACCENT_YELLOW),
            tiles[2],
        );
        frame.render_widget(
            MetricTile::new(
                "HIGH-VALUE TXNS",
                self.run.high_value.len().to_string(),
                ACCENT_RED,
            ),
            tiles[3],
        );
    }

    fn render_products(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .run
            .summary
            .iter()
            .map(|p| {
                Row::new(vec![
                    p.product_id.to_string(),
                    format!("{:.2}", p.total_revenue),
                    format!("{:.2}", p.rating),
                    p.quantity.to_string(),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(16),
                Constraint::Length(8),
                Constraint::Length(10),
            ],
        )
        .header(
            // "quantity" is the group row count, same as the report CSV
            Row::new(vec!["product_id", "total_revenue", "rating", "quantity"]).style(
                Style::default()
                    .fg(ACCENT_CYAN)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(
            Block::default()
                .title(" PRODUCT SUMMARY ")
                .title_style(
                    Style::default()
                        .fg(ACCENT_GREEN)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_DIM)),
        );

        frame.render_widget(table, area);
    }

    fn render_high_value(&self, frame: &mut Frame, area: Rect) {
        let title = format!(
            " HIGH-VALUE TRANSACTIONS ({} rows, threshold {:.2}) ",
            self.run.high_value.len(),
            self.run.metrics.threshold()
        );
        self.render_sales_table(frame, area, &title, &self.run.high_value, ACCENT_RED);
    }

    fn render_raw(&self, frame: &mut Frame, area: Rect) {
        self.render_sales_table(
            frame,
            area,
            " CLEANED TRANSACTIONS ",
            &self.run.enriched,
            ACCENT_PURPLE,
        );
    }

    fn render_sales_table(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        sales: &[EnrichedSale],
        accent: ratatui::style::Color,
    ) {
        let visible = area.height.saturating_sub(3) as usize;
        let scroll = self.scroll.min(sales.len().saturating_sub(visible));

        let rows: Vec<Row> = sales
            .iter()
            .skip(scroll)
            .take(visible)
            .map(|s| {
                Row::new(vec![
                    s.date.format("%Y-%m-%d").to_string(),
                    s.product_id.to_string(),
                    s.quantity.to_string(),
                    format!("{:.2}", s.unit_price),
                    format!("{:.2}", s.rating),
                    format!("{:.2}", s.total_revenue),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(14),
            ],
        )
        .header(
            Row::new(vec![
                "date",
                "product_id",
                "quantity",
                "unit_price",
                "rating",
                "total_revenue",
            ])
            .style(
                Style::default()
                    .fg(ACCENT_CYAN)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(
            Block::default()
                .title(title.to_string())
                .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_DIM)),
        );

        frame.render_widget(table, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let params = format!(
            " size={} seed={} start={} ",
            self.params.size, self.params.seed, self.params.start_date
        );
        let hints = "q quit │ tab/1-4 view │ r rerun │ +/- size │ s/S seed │ e export │ ? help";

        let mut spans = vec![
            Span::styled(params, Style::default().fg(ACCENT_CYAN)),
            Span::styled(hints, Style::default().fg(TEXT_DIM)),
        ];
        if let Some(status) = &self.status {
            spans.push(Span::styled(
                format!("  ▸ {status}"),
                Style::default().fg(ACCENT_YELLOW),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let width = 46.min(area.width);
        let height = 14.min(area.height);
        let popup = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        let lines = vec![
            Line::from(""),
            Line::from("  q / Esc      quit"),
            Line::from("  Tab / 1-4    switch view"),
            Line::from("  r            re-run pipeline"),
            Line::from("  + / -        rows +10 / -10"),
            Line::from("  s / S        seed +1 / -1"),
            Line::from("  e            export CSV artifacts"),
            Line::from("  ↑↓ PgUp/PgDn scroll tables"),
            Line::from("  ?            toggle this help"),
        ];

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().fg(TEXT_BRIGHT)).block(
                Block::default()
                    .title(" KEYS ")
                    .title_style(
                        Style::default()
                            .fg(ACCENT_CYAN)
                            .add_modifier(Modifier::BOLD),
                    )
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER_DIM)),
            ),
            popup,
        );
    }
}
