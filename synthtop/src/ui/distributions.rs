//! Per-metric histograms in a 2x2 grid, 25 bins each.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use crate::analyze::Analysis;
use crate::types::{Metric, MetricsTable};
use crate::ui::{theme, util};

const BINS: usize = 25;

pub fn draw_distributions(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    table: &MetricsTable,
    analysis: &Analysis,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(area);

    for (i, metric) in Metric::ALL.into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(rows[i / 2]);
        draw_histogram(f, cols[i % 2], table, analysis, metric);
    }
}

fn draw_histogram(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    table: &MetricsTable,
    analysis: &Analysis,
    metric: Metric,
) {
    let series = table.series(metric);
    let summary = analysis.summary(metric);
    let (counts, lo, hi) = util::histogram(series, BINS);
    let mean_bin = util::bin_of(summary.mean, BINS, lo, hi);
    let bin_width = (hi - lo) / BINS as f64;

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let center = lo + (i as f64 + 0.5) * bin_width;
            // The mean's bin doubles as the mean marker; CPU/Memory bins
            // past the warn/crit levels get tinted
            let color = if mean_bin == Some(i) {
                theme::MEAN
            } else if matches!(metric, Metric::Cpu | Metric::Memory) && center >= 90.0 {
                theme::CRIT
            } else if matches!(metric, Metric::Cpu | Metric::Memory) && center >= 80.0 {
                theme::WARN
            } else {
                theme::metric_color(metric)
            };
            Bar::default()
                .value(count)
                .style(Style::default().fg(color))
                .text_value(String::new())
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / BINS as u16).max(1);
    let title = format!(
        "{} distribution ({:.1}..{:.1}, mean {:.1})",
        metric.label(),
        lo,
        hi,
        summary.mean
    );

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .bar_width(bar_width)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}
