//! Summary statistics over a generated table, plus the printed report.

use std::fmt::Write as _;

use statrs::statistics::{Data, OrderStatistics, Statistics};

use crate::types::{Metric, MetricsTable};

/// Descriptive statistics for one metric.
#[derive(Debug, Clone, Copy)]
pub struct MetricSummary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub p95: f64,
    /// Rows strictly above the metric's threshold.
    pub high: usize,
}

/// One summary per metric, computed once from a complete table and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Analysis {
    summaries: [MetricSummary; 4],
}

impl Analysis {
    pub fn compute(table: &MetricsTable) -> Self {
        Self {
            summaries: Metric::ALL.map(|m| summarize(table.series(m), m.threshold())),
        }
    }

    pub fn summary(&self, metric: Metric) -> &MetricSummary {
        // Metric::ALL order matches the declaration order used here
        &self.summaries[metric as usize]
    }

    /// Render the stdout report: a banner plus one line per metric.
    pub fn report(&self) -> String {
        let bar = "=".repeat(50);
        let mut out = String::new();
        let _ = writeln!(out, "{bar}\nPERFORMANCE ANALYSIS\n{bar}");
        for metric in Metric::ALL {
            let s = self.summary(metric);
            let _ = writeln!(
                out,
                "{:8} | Avg: {:5.1} | Max: {:5.1} | Std: {:4.1} | >Thresh: {:3}",
                metric.label(),
                s.mean,
                s.max,
                s.std_dev,
                s.high
            );
        }
        out
    }
}

fn summarize(values: &[f64], threshold: f64) -> MetricSummary {
    let mut data = Data::new(values.to_vec());
    MetricSummary {
        mean: values.mean(),
        max: values.max(),
        min: values.min(),
        std_dev: values.population_std_dev(),
        p95: data.percentile(95),
        high: values.iter().filter(|&&v| v > threshold).count(),
    }
}

/// Box-plot quartiles for one series.
#[derive(Debug, Clone, Copy)]
pub struct FiveNumber {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

pub fn five_number(values: &[f64]) -> FiveNumber {
    let mut data = Data::new(values.to_vec());
    FiveNumber {
        min: values.min(),
        q1: data.lower_quartile(),
        median: data.median(),
        q3: data.upper_quartile(),
        max: values.max(),
    }
}

/// Pairwise Pearson correlation across the four metrics, in `Metric::ALL`
/// order. Computed on demand by the dashboard; nothing else needs it.
pub fn correlation_matrix(table: &MetricsTable) -> [[f64; 4]; 4] {
    let mut out = [[0.0; 4]; 4];
    for (i, a) in Metric::ALL.into_iter().enumerate() {
        for (j, b) in Metric::ALL.into_iter().enumerate() {
            out[i][j] = if i == j {
                1.0
            } else {
                pearson(table.series(a), table.series(b))
            };
        }
    }
    out
}

fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let (sx, sy) = (xs.std_dev(), ys.std_dev());
    if sx == 0.0 || sy == 0.0 {
        // A constant series correlates with nothing
        return 0.0;
    }
    xs.covariance(ys) / (sx * sy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn table_from_columns(cpu: &[f64], memory: &[f64], disk: &[f64], network: &[f64]) -> MetricsTable {
        let now = Local::now();
        let mut table = MetricsTable::with_capacity(cpu.len());
        for i in 0..cpu.len() {
            let t = now + Duration::minutes(i as i64);
            table.push_row(t, cpu[i], memory[i], disk[i], network[i]);
        }
        table
    }

    #[test]
    fn summary_of_known_values() {
        let table = table_from_columns(
            &[10.0, 20.0, 30.0, 90.0],
            &[50.0; 4],
            &[1.0, 2.0, 3.0, 4.0],
            &[99.0, 100.0, 101.0, 150.0],
        );
        let a = Analysis::compute(&table);

        let cpu = a.summary(Metric::Cpu);
        assert_eq!(cpu.mean, 37.5);
        assert_eq!(cpu.max, 90.0);
        assert_eq!(cpu.min, 10.0);
        assert_eq!(cpu.high, 1);

        // Strictly above 100: 101 and 150 count, 100 does not
        assert_eq!(a.summary(Metric::Network).high, 2);
        // Constant series has zero spread
        assert_eq!(a.summary(Metric::Memory).std_dev, 0.0);
        assert_eq!(a.summary(Metric::Memory).high, 0);
    }

    #[test]
    fn report_lists_every_metric() {
        let table = table_from_columns(&[50.0; 3], &[60.0; 3], &[10.0; 3], &[25.0; 3]);
        let report = Analysis::compute(&table).report();
        assert!(report.contains("PERFORMANCE ANALYSIS"));
        for metric in Metric::ALL {
            assert!(report.contains(metric.label()), "missing {}", metric.label());
        }
        assert!(report.contains(">Thresh:"));
        assert_eq!(report.lines().count(), 7); // 3 banner lines + 4 metrics
    }

    #[test]
    fn five_number_is_ordered() {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let f = five_number(&values);
        assert!(f.min <= f.q1 && f.q1 <= f.median && f.median <= f.q3 && f.q3 <= f.max);
        assert_eq!(f.min, 1.0);
        assert_eq!(f.max, 100.0);
        assert!((f.median - 50.5).abs() < 1.0);
    }

    #[test]
    fn correlation_diagonal_and_symmetry() {
        let cpu: Vec<f64> = (0..50).map(f64::from).collect();
        let memory: Vec<f64> = cpu.iter().map(|v| v * 2.0 + 3.0).collect(); // perfectly correlated
        let disk: Vec<f64> = cpu.iter().map(|v| 100.0 - v).collect(); // perfectly anti-correlated
        let network: Vec<f64> = cpu.iter().map(|v| (v * 7.3).sin() * 50.0 + 60.0).collect();
        let table = table_from_columns(&cpu, &memory, &disk, &network);

        let corr = correlation_matrix(&table);
        for i in 0..4 {
            assert!((corr[i][i] - 1.0).abs() < 1e-12);
            for j in 0..4 {
                assert!((corr[i][j] - corr[j][i]).abs() < 1e-9);
                assert!(corr[i][j] >= -1.0 - 1e-9 && corr[i][j] <= 1.0 + 1e-9);
            }
        }
        assert!((corr[0][1] - 1.0).abs() < 1e-9);
        assert!((corr[0][2] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn constant_series_correlates_with_nothing() {
        let table = table_from_columns(
            &[50.0; 10],
            &(0..10).map(f64::from).collect::<Vec<_>>(),
            &[10.0; 10],
            &[25.0; 10],
        );
        let corr = correlation_matrix(&table);
        assert_eq!(corr[0][1], 0.0);
        assert_eq!(corr[0][0], 1.0);
    }
}
