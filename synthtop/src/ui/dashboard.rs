//! 2x2 dashboard: CPU+Memory overlay, overlaid histograms, box plots, and a
//! correlation heatmap with numeric annotations.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::analyze::{correlation_matrix, five_number, Analysis};
use crate::types::{Metric, MetricsTable};
use crate::ui::{theme, util};

pub fn draw_dashboard(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    table: &MetricsTable,
    _analysis: &Analysis,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(rows[1]);

    draw_cpu_mem_overlay(f, top[0], table);
    draw_cpu_mem_histogram(f, top[1], table);
    draw_box_plots(f, bottom[0], table);
    draw_correlation(f, bottom[1], table);
}

fn draw_cpu_mem_overlay(f: &mut ratatui::Frame<'_>, area: Rect, table: &MetricsTable) {
    let max_points = (area.width.saturating_sub(8) as usize * 2).max(1);
    let cpu = util::chart_points(table.series(Metric::Cpu), max_points);
    let memory = util::chart_points(table.series(Metric::Memory), max_points);
    let x_max = table.len().saturating_sub(1).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name("CPU")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::CPU))
            .data(&cpu),
        Dataset::default()
            .name("Memory")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::MEMORY))
            .data(&memory),
    ];

    let x_labels: Vec<Span> = util::time_labels(&table.timestamps)
        .into_iter()
        .map(Span::raw)
        .collect();
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("CPU & Memory over time"),
        )
        .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels))
        .y_axis(Axis::default().bounds([0.0, 100.0]).labels(vec![
            Span::raw("0"),
            Span::raw("50"),
            Span::raw("100"),
        ]));
    f.render_widget(chart, area);
}

fn draw_cpu_mem_histogram(f: &mut ratatui::Frame<'_>, area: Rect, table: &MetricsTable) {
    const BINS: usize = 25;
    // Shared 0..100 range so the two histograms line up, drawn as paired
    // columns per bin
    let cpu_counts = util::histogram_range(table.series(Metric::Cpu), BINS, 0.0, 100.0);
    let mem_counts = util::histogram_range(table.series(Metric::Memory), BINS, 0.0, 100.0);

    let mut bars: Vec<Bar> = Vec::with_capacity(BINS * 2);
    for i in 0..BINS {
        bars.push(
            Bar::default()
                .value(cpu_counts[i])
                .style(Style::default().fg(theme::CPU))
                .text_value(String::new()),
        );
        bars.push(
            Bar::default()
                .value(mem_counts[i])
                .style(Style::default().fg(theme::MEMORY))
                .text_value(String::new()),
        );
    }

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / (BINS * 2) as u16).max(1);
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("CPU vs Memory distribution (0..100)"),
        )
        .bar_width(bar_width)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

fn draw_box_plots(f: &mut ratatui::Frame<'_>, area: Rect, table: &MetricsTable) {
    // Shared axis so the four boxes are comparable; Network's 200 sets it
    let axis_hi = Metric::ALL
        .iter()
        .map(|m| m.bounds().1)
        .fold(1.0, f64::max);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Metrics comparison (0..{axis_hi:.0})"));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if table.is_empty() || inner.width < 20 || inner.height == 0 {
        return;
    }

    const LABEL_W: usize = 8;
    const VALUE_W: usize = 7;
    let gauge_w = inner.width as usize - LABEL_W - VALUE_W;

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (i, metric) in Metric::ALL.into_iter().enumerate() {
        let fnum = five_number(table.series(metric));
        let line = box_plot_line(metric, &fnum, axis_hi, gauge_w);
        f.render_widget(Paragraph::new(line), slots[i]);
    }
}

/// One text-mode box plot row: whiskers, interquartile box, median tick.
fn box_plot_line(
    metric: Metric,
    fnum: &crate::analyze::FiveNumber,
    axis_hi: f64,
    width: usize,
) -> Line<'static> {
    let color = theme::metric_color(metric);
    let pos = |v: f64| (((v / axis_hi) * (width - 1) as f64).round() as usize).min(width - 1);
    let (p_min, p_q1, p_med, p_q3, p_max) = (
        pos(fnum.min),
        pos(fnum.q1),
        pos(fnum.median),
        pos(fnum.q3),
        pos(fnum.max),
    );

    let mut spans = vec![Span::styled(
        format!("{:<8}", metric.label()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    for x in 0..width {
        let span = if x == p_med {
            Span::styled("┃", Style::default().fg(theme::MEAN).add_modifier(Modifier::BOLD))
        } else if x >= p_q1 && x <= p_q3 {
            Span::styled("█", Style::default().fg(color))
        } else if x == p_min || x == p_max {
            Span::styled("│", Style::default().fg(color))
        } else if x > p_min && x < p_max {
            Span::styled("─", Style::default().fg(color))
        } else {
            Span::raw(" ")
        };
        spans.push(span);
    }
    spans.push(Span::styled(
        format!(" {:>6.1}", fnum.median),
        Style::default().fg(theme::MEAN),
    ));
    Line::from(spans)
}

fn draw_correlation(f: &mut ratatui::Frame<'_>, area: Rect, table: &MetricsTable) {
    let corr = correlation_matrix(table);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Correlation matrix");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width < 24 || inner.height < 5 {
        return;
    }

    const LABEL_W: u16 = 8;
    let grid = Rect {
        x: inner.x + LABEL_W,
        y: inner.y + 1,
        width: inner.width - LABEL_W,
        height: inner.height - 1,
    };
    let cell_w = (grid.width / 4).max(1);
    let cell_h = (grid.height / 4).max(1);

    // Column headers
    for (j, metric) in Metric::ALL.into_iter().enumerate() {
        let head = Rect {
            x: grid.x + j as u16 * cell_w,
            y: inner.y,
            width: cell_w,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(metric.label())
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme::metric_color(metric))),
            head,
        );
    }

    for (i, metric) in Metric::ALL.into_iter().enumerate() {
        let y = grid.y + i as u16 * cell_h;
        if y >= inner.y + inner.height {
            break;
        }
        let row_h = cell_h.min(inner.y + inner.height - y);

        let row_label = Rect {
            x: inner.x,
            y: y + row_h / 2,
            width: LABEL_W,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(metric.label()).style(Style::default().fg(theme::metric_color(metric))),
            row_label,
        );

        for j in 0..4 {
            let r = corr[i][j];
            let cell = Rect {
                x: grid.x + j as u16 * cell_w,
                y,
                width: cell_w,
                height: row_h,
            };
            // White text on strongly-colored cells, black on pale ones
            let fg = if r.abs() < 0.7 { Color::Black } else { Color::White };
            let mut lines = vec![Line::raw(""); (row_h / 2) as usize];
            lines.push(Line::raw(format!("{r:.2}")));
            f.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(fg).bg(util::coolwarm(r))),
                cell,
            );
        }
    }
}
