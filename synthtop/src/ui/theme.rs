//! Shared chart colors.

use ratatui::style::Color;

use crate::types::Metric;

// Per-metric line colors
pub const CPU: Color = Color::Rgb(0x2e, 0x86, 0xab);
pub const MEMORY: Color = Color::Rgb(0xa2, 0x3b, 0x72);
pub const DISK: Color = Color::Rgb(0xf1, 0x8f, 0x01);
pub const NETWORK: Color = Color::Rgb(0xc7, 0x3e, 0x1d);

// Reference lines and markers
pub const WARN: Color = Color::Rgb(0xff, 0xa5, 0x00);
pub const CRIT: Color = Color::Red;
pub const MEAN: Color = Color::White;

pub fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::Cpu => CPU,
        Metric::Memory => MEMORY,
        Metric::Disk => DISK,
        Metric::Network => NETWORK,
    }
}

/// Darkened variant used to shade the area under a line.
pub fn fill_color(metric: Metric) -> Color {
    match metric_color(metric) {
        Color::Rgb(r, g, b) => Color::Rgb(r / 3, g / 3, b / 3),
        c => c,
    }
}
