//! Small chart helpers: downsampling, histogram binning, heatmap colors.

use chrono::{DateTime, Local};
use ratatui::style::Color;

/// Turn a series into `(x, y)` chart points, bucket-averaging down to at most
/// `max_points` so a long series still fits the braille grid. The x of a
/// bucket is its center row index, keeping the x axis in row units.
pub fn chart_points(series: &[f64], max_points: usize) -> Vec<(f64, f64)> {
    let n = series.len();
    if n == 0 || max_points == 0 {
        return Vec::new();
    }
    if n <= max_points {
        return series.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
    }
    let bucket = n.div_ceil(max_points);
    series
        .chunks(bucket)
        .enumerate()
        .map(|(b, chunk)| {
            let x = (b * bucket) as f64 + (chunk.len() as f64 - 1.0) / 2.0;
            let y = chunk.iter().sum::<f64>() / chunk.len() as f64;
            (x, y)
        })
        .collect()
}

/// Dense scatter points filling the area between the x axis and a polyline,
/// for shading under a curve. `steps` is the vertical resolution, normally
/// four braille rows per cell.
pub fn fill_points(line: &[(f64, f64)], y_max: f64, steps: usize) -> Vec<(f64, f64)> {
    if steps == 0 || y_max <= 0.0 {
        return Vec::new();
    }
    let step = y_max / steps as f64;
    let mut points = Vec::new();
    for &(x, y) in line {
        let mut level = 0.0;
        while level < y {
            points.push((x, level));
            level += step;
        }
    }
    points
}

/// Histogram over `[lo, hi)` with the top edge inclusive.
pub fn histogram_range(values: &[f64], bins: usize, lo: f64, hi: f64) -> Vec<u64> {
    let mut counts = vec![0u64; bins];
    if bins == 0 || hi <= lo {
        return counts;
    }
    let width = (hi - lo) / bins as f64;
    for &v in values {
        if v < lo || v > hi {
            continue;
        }
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    counts
}

/// Histogram spanning the data's own min..max. Returns `(counts, lo, hi)`;
/// a constant or empty series collapses into a single occupied bin.
pub fn histogram(values: &[f64], bins: usize) -> (Vec<u64>, f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !lo.is_finite() || !hi.is_finite() {
        return (vec![0; bins], 0.0, 1.0);
    }
    if hi <= lo {
        let mut counts = vec![0u64; bins];
        if bins > 0 {
            counts[0] = values.len() as u64;
        }
        return (counts, lo, lo + 1.0);
    }
    (histogram_range(values, bins, lo, hi), lo, hi)
}

/// Which bin of `bins` over `[lo, hi)` a value falls in, if any.
pub fn bin_of(value: f64, bins: usize, lo: f64, hi: f64) -> Option<usize> {
    if bins == 0 || hi <= lo || !value.is_finite() || value < lo || value > hi {
        return None;
    }
    let width = (hi - lo) / bins as f64;
    Some((((value - lo) / width) as usize).min(bins - 1))
}

/// First/middle/last timestamps formatted for an x axis.
pub fn time_labels(timestamps: &[DateTime<Local>]) -> Vec<String> {
    match timestamps {
        [] => Vec::new(),
        [only] => vec![only.format("%H:%M").to_string()],
        _ => {
            let mid = &timestamps[timestamps.len() / 2];
            vec![
                timestamps[0].format("%H:%M").to_string(),
                mid.format("%H:%M").to_string(),
                timestamps[timestamps.len() - 1].format("%H:%M").to_string(),
            ]
        }
    }
}

/// Blue-white-red ramp for correlation coefficients in [-1, 1].
pub fn coolwarm(r: f64) -> Color {
    if !r.is_finite() {
        return Color::DarkGray;
    }
    let t = ((r + 1.0) / 2.0).clamp(0.0, 1.0);
    let (from, to, local) = if t < 0.5 {
        ((59.0, 76.0, 192.0), (221.0, 221.0, 221.0), t * 2.0)
    } else {
        ((221.0, 221.0, 221.0), (180.0, 4.0, 38.0), (t - 0.5) * 2.0)
    };
    let lerp = |a: f64, b: f64| (a + (b - a) * local).round() as u8;
    Color::Rgb(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_points_keep_short_series_verbatim() {
        let pts = chart_points(&[1.0, 2.0, 3.0], 10);
        assert_eq!(pts, vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    }

    #[test]
    fn chart_points_bucket_long_series() {
        let series: Vec<f64> = (0..100).map(f64::from).collect();
        let pts = chart_points(&series, 10);
        assert!(pts.len() <= 10);
        // Bucket means preserve the overall trend
        assert!(pts.first().unwrap().1 < pts.last().unwrap().1);
    }

    #[test]
    fn histogram_counts_every_value_once() {
        let values: Vec<f64> = (0..250).map(|i| f64::from(i) / 2.5).collect();
        let (counts, lo, hi) = histogram(&values, 25);
        assert_eq!(counts.iter().sum::<u64>(), 250);
        assert_eq!(lo, 0.0);
        assert!((hi - 99.6).abs() < 1e-9);
    }

    #[test]
    fn histogram_of_constant_series_uses_one_bin() {
        let (counts, _, _) = histogram(&[5.0; 8], 25);
        assert_eq!(counts[0], 8);
        assert_eq!(counts.iter().sum::<u64>(), 8);
    }

    #[test]
    fn bin_of_respects_edges() {
        assert_eq!(bin_of(0.0, 25, 0.0, 100.0), Some(0));
        assert_eq!(bin_of(100.0, 25, 0.0, 100.0), Some(24));
        assert_eq!(bin_of(-0.1, 25, 0.0, 100.0), None);
    }

    #[test]
    fn coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0), Color::Rgb(59, 76, 192));
        assert_eq!(coolwarm(1.0), Color::Rgb(180, 4, 38));
        assert_eq!(coolwarm(0.0), Color::Rgb(221, 221, 221));
    }
}
