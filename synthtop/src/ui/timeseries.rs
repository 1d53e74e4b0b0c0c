//! Stacked per-metric line charts with shaded area and threshold lines.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::types::{Metric, MetricsTable};
use crate::ui::{theme, util};

pub fn draw_time_series(f: &mut ratatui::Frame<'_>, area: Rect, table: &MetricsTable) {
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, metric) in Metric::ALL.into_iter().enumerate() {
        draw_metric_panel(f, panels[i], table, metric);
    }
}

fn draw_metric_panel(f: &mut ratatui::Frame<'_>, area: Rect, table: &MetricsTable, metric: Metric) {
    let series = table.series(metric);
    // Braille gives two points per cell of width; leave room for the y labels
    let max_points = (area.width.saturating_sub(8) as usize * 2).max(1);
    let line = util::chart_points(series, max_points);

    let (_, hi) = metric.bounds();
    let x_max = series.len().saturating_sub(1).max(1) as f64;

    // Four braille rows per cell of height
    let y_steps = (area.height.saturating_sub(2) as usize * 4).max(1);
    let fill = util::fill_points(&line, hi, y_steps);

    let refs = metric.ref_levels();
    let warn_pts = refs.map(|(w, _)| [(0.0, w), (x_max, w)]);
    let crit_pts = refs.map(|(_, c)| [(0.0, c), (x_max, c)]);

    let mut datasets = vec![
        // Shaded area under the curve, then the curve itself on top
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(theme::fill_color(metric)))
            .data(&fill),
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::metric_color(metric)))
            .data(&line),
    ];
    if let Some(pts) = warn_pts.as_ref() {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme::WARN))
                .data(pts),
        );
    }
    if let Some(pts) = crit_pts.as_ref() {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme::CRIT))
                .data(pts),
        );
    }

    let title = match series.last() {
        Some(v) => format!("{} (now: {:>5.1})", metric.label(), v),
        None => metric.label().to_string(),
    };
    let x_labels: Vec<Span> = util::time_labels(&table.timestamps)
        .into_iter()
        .map(Span::raw)
        .collect();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", hi / 2.0)),
        Span::raw(format!("{hi:.0}")),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels))
        .y_axis(Axis::default().bounds([0.0, hi]).labels(y_labels));
    f.render_widget(chart, area);
}
