//! The time-series table and per-metric constants shared by all stages.

use chrono::{DateTime, Local};

/// The four synthesized fields, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
    Network,
}

impl Metric {
    /// Declaration order doubles as the column index.
    pub const ALL: [Metric; 4] = [Metric::Cpu, Metric::Memory, Metric::Disk, Metric::Network];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU",
            Metric::Memory => "Memory",
            Metric::Disk => "Disk",
            Metric::Network => "Network",
        }
    }

    /// Clamp bounds the generator saturates each sample to.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Metric::Cpu => (5.0, 100.0),
            Metric::Memory => (20.0, 95.0),
            Metric::Disk => (1.0, 100.0),
            Metric::Network => (10.0, 200.0),
        }
    }

    /// Cutoff for counting "high" readings (strictly above).
    pub fn threshold(self) -> f64 {
        match self {
            Metric::Network => 100.0,
            _ => 80.0,
        }
    }

    /// Warning/critical reference levels drawn on charts, where defined.
    pub fn ref_levels(self) -> Option<(f64, f64)> {
        match self {
            Metric::Cpu | Metric::Memory => Some((80.0, 90.0)),
            Metric::Network => Some((100.0, 150.0)),
            Metric::Disk => None,
        }
    }
}

/// Column-major table of samples, oldest row first.
///
/// Timestamps are evenly spaced by the sampling interval and end at "now"
/// when produced by the generator; every value is clamped to its metric's
/// [`Metric::bounds`].
#[derive(Debug, Clone, Default)]
pub struct MetricsTable {
    pub timestamps: Vec<DateTime<Local>>,
    pub cpu: Vec<f64>,
    pub memory: Vec<f64>,
    pub disk: Vec<f64>,
    pub network: Vec<f64>,
}

impl MetricsTable {
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(rows),
            cpu: Vec::with_capacity(rows),
            memory: Vec::with_capacity(rows),
            disk: Vec::with_capacity(rows),
            network: Vec::with_capacity(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn push_row(&mut self, t: DateTime<Local>, cpu: f64, memory: f64, disk: f64, network: f64) {
        self.timestamps.push(t);
        self.cpu.push(cpu);
        self.memory.push(memory);
        self.disk.push(disk);
        self.network.push(network);
    }

    pub fn series(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Cpu => &self.cpu,
            Metric::Memory => &self.memory,
            Metric::Disk => &self.disk,
            Metric::Network => &self.network,
        }
    }
}
