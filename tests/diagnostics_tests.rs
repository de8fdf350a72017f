mod common;

use common::{approx, debug_reading, reading};
use rbattlog::core::calculator::diagnostics::{
    battery_health, capacity_comparison, current_consumption, power_consumption,
    temperature_current_correlation, temperature_heatmap, temperature_heatmap_with_bins,
    temperature_vs_usage, voltage_degradation,
};
use rbattlog::models::reading::Reading;

fn debug_session(n: usize) -> Vec<Reading> {
    (0..n)
        .map(|i| {
            debug_reading(
                i,
                100.0 - i as f64,
                300.0 + i as f64,
                -250_000.0,
                4_000_000.0 - i as f64 * 10_000.0,
            )
        })
        .collect()
}

#[test]
fn temperature_is_converted_from_tenths() {
    let mut rows = debug_session(3);
    rows[0].diag.temperature_dc = 235.0;

    let points = temperature_vs_usage(&rows);
    assert_eq!(points.len(), 3);
    assert!(approx(points[0].temperature, 23.5));
    assert!(approx(points[0].battery, 100.0));
}

#[test]
fn temperature_skips_rows_without_battery_or_reading() {
    let mut rows = debug_session(4);
    rows[1].diag.temperature_dc = -1.0;
    rows[2].wad_battery = -1.0;

    assert_eq!(temperature_vs_usage(&rows).len(), 2);
}

#[test]
fn current_is_magnitude_in_milliamps() {
    let mut rows = debug_session(2);
    rows[1].diag.current_ua = 180_000.0;

    let points = current_consumption(&rows);
    assert!(approx(points[0].current_ma, 250.0));
    assert!(approx(points[1].current_ma, 180.0));
    assert_eq!(points[0].quality, "HD");
}

#[test]
fn voltage_is_sorted_by_battery_descending() {
    let mut rows = debug_session(4);
    rows[0].wad_battery = 20.0;
    rows[2].wad_battery = 95.0;
    rows[0].diag.voltage_uv = 3_700_000.0;

    let points = voltage_degradation(&rows);
    let batteries: Vec<f64> = points.iter().map(|p| p.battery).collect();
    assert_eq!(batteries, vec![99.0, 97.0, 95.0, 20.0]);
    assert!(approx(points[3].voltage, 3.7));
}

#[test]
fn power_is_volts_times_amps() {
    let rows = vec![debug_reading(0, 90.0, 300.0, -500_000.0, 3_800_000.0)];
    let points = power_consumption(&rows);

    assert_eq!(points.len(), 1);
    assert!((points[0].power_mw - 1900.0).abs() < 1e-6);
}

#[test]
fn correlation_progress_uses_row_position() {
    let mut rows = debug_session(4);
    rows[1].diag.current_ua = -1.0;

    let points = temperature_current_correlation(&rows);
    let progress: Vec<f64> = points.iter().map(|p| p.progress).collect();
    assert_eq!(progress, vec![0.0, 50.0, 75.0]);
}

#[test]
fn capacity_keeps_both_readings() {
    let mut rows = debug_session(2);
    rows[1].diag.capacity = 92.0;

    let points = capacity_comparison(&rows);
    assert!(approx(points[1].reported_battery, 99.0));
    assert!(approx(points[1].adb_capacity, 92.0));
}

#[test]
fn health_changes_are_reported_once() {
    let mut rows = debug_session(5);
    rows[0].diag.health = "Unknown".to_string();
    rows[3].diag.health = "Overheat".to_string();
    rows[4].diag.health = "Overheat".to_string();

    let report = battery_health(&rows);
    assert_eq!(report.timeline.len(), 5);

    let changes: Vec<(usize, &str)> = report
        .changes
        .iter()
        .map(|c| (c.index, c.health.as_str()))
        .collect();
    assert_eq!(changes, vec![(1, "Good"), (3, "Overheat")]);
}

#[test]
fn diagnostics_stop_at_wad_shutdown() {
    let mut rows = debug_session(6);
    rows[4].wad_battery = -1.0;
    rows[5].wad_battery = -1.0;

    assert_eq!(current_consumption(&rows).len(), 4);
    assert_eq!(battery_health(&rows).timeline.len(), 4);
}

#[test]
fn heatmap_counts_every_sample_once() {
    let rows = debug_session(60);
    let heatmap = temperature_heatmap(&rows);

    assert_eq!(heatmap.bins.len(), 100);
    assert_eq!(heatmap.total_count(), 60);
    assert_eq!(heatmap.samples.len(), 60);
    assert!(approx(heatmap.temp_range.0, 30.0));
    assert!(approx(heatmap.temp_range.1, 35.9));
}

#[test]
fn heatmap_with_constant_temperature_uses_first_bin() {
    let mut rows = debug_session(12);
    for r in &mut rows {
        r.diag.temperature_dc = 310.0;
    }

    let heatmap = temperature_heatmap_with_bins(&rows, 4);
    assert_eq!(heatmap.bins.len(), 16);
    assert_eq!(heatmap.total_count(), 12);
    assert!(heatmap.bins.iter().all(|b| b.count == 0 || approx(b.temp_min, 31.0)));
}

#[test]
fn heatmap_without_samples_is_empty() {
    let rows: Vec<_> = (0..10).map(|i| reading(i, 50.0, 5.0)).collect();
    let heatmap = temperature_heatmap(&rows);

    assert!(heatmap.bins.is_empty());
    assert_eq!(heatmap.total_count(), 0);
}
