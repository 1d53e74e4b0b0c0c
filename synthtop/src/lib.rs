//! Synthetic system-metrics playground: fakes a CPU/memory/disk/network time
//! series, summarizes it, and pages through three chart views in the terminal.
//!
//! The pipeline is strictly generate -> analyze -> render; the stages only
//! talk through [`types::MetricsTable`] and [`analyze::Analysis`], so the TUI
//! renderer can be swapped out without touching data generation or analysis.

pub mod analyze;
pub mod app;
pub mod generate;
pub mod types;
pub mod ui;
