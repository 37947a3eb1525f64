//! Custom TUI widgets for the sales dashboard.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{BarChart, Block, Borders, Paragraph, Widget},
};

// Dashboard color palette
pub const ACCENT_CYAN: Color = Color::Rgb(0, 255, 255);
pub const ACCENT_GREEN: Color = Color::Rgb(0, 255, 136);
pub const ACCENT_RED: Color = Color::Rgb(255, 68, 68);
pub const ACCENT_YELLOW: Color = Color::Rgb(255, 204, 0);
pub const ACCENT_PURPLE: Color = Color::Rgb(168, 85, 247);
pub const TEXT_DIM: Color = Color::Rgb(128, 128, 128);
pub const TEXT_BRIGHT: Color = Color::Rgb(255, 255, 255);
pub const BORDER_DIM: Color = Color::Rgb(48, 48, 48);

/// A single KPI card: label on the border, one large value inside.
pub struct MetricTile<'a> {
    label: &'a str,
    value: String,
    color: Color,
}

impl<'a> MetricTile<'a> {
    pub fn new(label: &'a str, value: String, color: Color) -> Self {
        Self {
            label,
            value,
            color,
        }
    }
}

impl<'a> Widget for MetricTile<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .title_style(Style::default().fg(TEXT_DIM))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DIM));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Vertically centered single-line value
        let value_area = Rect {
            x: inner.x,
            y: inner.y + inner.height / 2,
            width: inner.width,
            height: 1,
        };
        Paragraph::new(self.value)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.color)
                    .add_modifier(Modifier::BOLD),
            )
            .render(value_area, buf);
    }
}

/// Bar chart of total revenue per product.
pub fn revenue_bar_chart<'a>(data: &'a [(&'a str, u64)], bar_width: u16) -> BarChart<'a> {
    BarChart::default()
        .block(
            Block::default()
                .title(" REVENUE BY PRODUCT ")
                .title_style(
                    Style::default()
                        .fg(ACCENT_CYAN)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER_DIM)),
        )
        .data(data)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(ACCENT_GREEN))
        .value_style(Style::default().fg(TEXT_BRIGHT).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(TEXT_DIM))
}

/// Revenue distribution histogram with average and high-value threshold
/// reference marks.
pub struct RevenueHistogram<'a> {
    revenues: &'a [f64],
    average: f64,
    threshold: f64,
}

impl<'a> RevenueHistogram<'a> {
    pub fn new(revenues: &'a [f64], average: f64, threshold: f64) -> Self {
        Self {
            revenues,
            average,
            threshold,
        }
    }
}

impl<'a> Widget for RevenueHistogram<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" REVENUE DISTRIBUTION ")
            .title_style(
                Style::default()
                    .fg(ACCENT_PURPLE)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DIM));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 12 || inner.height < 4 {
            return;
        }

        // One column per bin, a legend line at the bottom
        let bin_count = inner.width as usize;
        let Some(histogram) = histogram_bins(self.revenues, bin_count) else {
            buf.set_string(
                inner.x + 1,
                inner.y + 1,
                "no data",
                Style::default().fg(TEXT_DIM),
            );
            return;
        };

        let max_count = histogram.counts.iter().max().copied().unwrap_or(1).max(1);
        let bar_rows = inner.height - 1;

        for (bin, &count) in histogram.counts.iter().enumerate() {
            let x = inner.x + bin as u16;
            let height =
                ((count as f64 / max_count as f64) * f64::from(bar_rows)).round() as u16;
            for dy in 0..height {
                let y = inner.y + bar_rows - 1 - dy;
                buf.get_mut(x, y).set_char('█').set_fg(ACCENT_CYAN);
            }
        }

        // Reference marks: recolor the column's bar, draw '│' above it
        for (value, color) in [(self.average, ACCENT_YELLOW), (self.threshold, ACCENT_RED)] {
            if let Some(bin) = histogram.bin_of(value) {
                let x = inner.x + bin as u16;
                let filled = ((histogram.counts[bin] as f64 / max_count as f64)
                    * f64::from(bar_rows))
                .round() as u16;
                for dy in 0..bar_rows {
                    let cell = buf.get_mut(x, inner.y + dy);
                    if dy < bar_rows - filled {
                        cell.set_char('│');
                    }
                    cell.set_fg(color);
                }
            }
        }

        // Legend
        let legend_y = inner.y + inner.height - 1;
        let avg_label = format!("avg {:.0}", self.average);
        let thr_label = format!("  threshold {:.0}", self.threshold);
        let range_label = format!("  [{:.0} .. {:.0}]", histogram.lo, histogram.hi);
        let mut x = inner.x;
        for (label, color) in [
            (avg_label, ACCENT_YELLOW),
            (thr_label, ACCENT_RED),
            (range_label, TEXT_DIM),
        ] {
            if x >= inner.x + inner.width {
                break;
            }
            let room = (inner.x + inner.width - x) as usize;
            buf.set_stringn(x, legend_y, &label, room, Style::default().fg(color));
            x += label.chars().count() as u16;
        }
    }
}

/// Equal-width binning of the revenue column.
pub struct Histogram {
    pub counts: Vec<usize>,
    pub lo: f64,
    pub hi: f64,
    bin_width: f64,
}

impl Histogram {
    /// Bin index for a value, or None when it falls outside [lo, hi].
    pub fn bin_of(&self, value: f64) -> Option<usize> {
        if !value.is_finite() || value < self.lo || value > self.hi {
            return None;
        }
        let bin = ((value - self.lo) / self.bin_width) as usize;
        Some(bin.min(self.counts.len() - 1))
    }
}

/// Bin `values` into `bins` equal-width buckets. None for empty input.
pub fn histogram_bins(values: &[f64], bins: usize) -> Option<Histogram> {
    if values.is_empty() || bins == 0 {
        return None;
    }

    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Degenerate single-value dataset: everything lands in the first bin
    let bin_width = if hi > lo { (hi - lo) / bins as f64 } else { 1.0 };

    let mut counts = vec![0usize; bins];
    for &value in values {
        let bin = (((value - lo) / bin_width) as usize).min(bins - 1);
        counts[bin] += 1;
    }

    Some(Histogram {
        counts,
        lo,
        hi,
        bin_width,
    })
}
