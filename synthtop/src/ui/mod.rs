//! UI module root: exposes drawing functions for the three views.

pub mod dashboard;
pub mod distributions;
pub mod header;
pub mod theme;
pub mod timeseries;
pub mod util;
