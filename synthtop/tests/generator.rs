//! End-to-end properties of the synthetic generator.

use chrono::Duration;
use synthtop::generate::Generator;
use synthtop::types::Metric;

#[test]
fn one_hour_at_ten_minutes_yields_six_rows() {
    let table = Generator::new().generate(1.0, 10);
    assert_eq!(table.len(), 6);
    for pair in table.timestamps.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::minutes(10));
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn rerunning_unseeded_changes_values_but_not_shape() {
    let table_a = Generator::new().generate(1.0, 10);
    let table_b = Generator::new().generate(1.0, 10);
    assert_eq!(table_a.len(), table_b.len());
    // Six gaussian draws colliding across runs is as good as impossible
    assert_ne!(table_a.cpu, table_b.cpu);
}

#[test]
fn full_window_respects_every_clamp() {
    let table = Generator::new().generate(12.0, 5);
    assert_eq!(table.len(), 144);
    for metric in Metric::ALL {
        let (lo, hi) = metric.bounds();
        assert!(
            table.series(metric).iter().all(|&v| (lo..=hi).contains(&v)),
            "{} escaped [{lo},{hi}]",
            metric.label()
        );
    }
}

#[test]
fn partial_interval_rows_are_floored() {
    // 1h45m of 30-minute samples floors to 3 rows
    let table = Generator::new().generate(1.75, 30);
    assert_eq!(table.len(), 3);
}
