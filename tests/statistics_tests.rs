mod common;

use common::{approx, hour_session, reading};
use rbattlog::core::calculator::statistics::{compute_statistics, device_statistics, time_to_one_minute};
use rbattlog::core::logic::Core;
use rbattlog::models::device::Device;
use rbattlog::models::session::{Session, SessionSummary};

#[test]
fn hour_session_wad_statistics() {
    let rows = hour_session();
    let wad = compute_statistics(&rows).wad;

    assert_eq!(wad.valid_rows, 330);
    assert!(approx(wad.initial, 100.0));
    assert!(approx(wad.final_level, 40.0));
    assert!(approx(wad.drop, 60.0));
    assert!(approx(wad.real_time_minutes, 55.0));
    assert!((wad.avg_consumption - 60.0 / 55.0).abs() < 1e-9);
    assert!(approx(wad.max_duration_estimate, 120.0));
    // the estimate never gets down to one minute
    assert!(approx(wad.time_to_one_minute, 60.0));
}

#[test]
fn light_source_uses_intensity_window() {
    let rows: Vec<_> = (0..40)
        .map(|i| reading(i, 80.0, if (10..20).contains(&i) { 5.0 } else { -1.0 }))
        .collect();

    let ls = device_statistics(&rows, Device::LightSource);
    assert_eq!(ls.valid_rows, 20);
    assert!(approx(ls.real_time_minutes, 20.0 / 6.0));
}

#[test]
fn all_off_device_is_all_zeros() {
    let rows: Vec<_> = (0..12).map(|i| reading(i, -1.0, -1.0)).collect();
    let stats = compute_statistics(&rows);

    assert_eq!(stats.wad.valid_rows, 0);
    assert_eq!(stats.wad.initial, 0.0);
    assert_eq!(stats.wad.drop, 0.0);
    assert_eq!(stats.wad.avg_consumption, 0.0);
    assert_eq!(stats.light_source.real_time_minutes, 0.0);
    assert!(!stats.light_source.avg_consumption.is_nan());
}

#[test]
fn leading_off_rows_are_skipped_for_initial() {
    let mut rows: Vec<_> = (0..6).map(|i| reading(i, 90.0 - i as f64, 5.0)).collect();
    rows[0].wad_battery = -1.0;
    rows[1].wad_battery = -1.0;

    let wad = device_statistics(&rows, Device::Wad);
    assert_eq!(wad.valid_rows, 6);
    assert!(approx(wad.initial, 88.0));
    assert!(approx(wad.final_level, 85.0));
}

#[test]
fn rising_battery_gives_negative_drop() {
    let rows: Vec<_> = (0..6).map(|i| reading(i, 50.0 + i as f64, 5.0)).collect();
    let wad = device_statistics(&rows, Device::Wad);

    assert!(approx(wad.drop, -5.0));
    assert!(wad.avg_consumption < 0.0);
}

#[test]
fn single_row_session() {
    let rows = vec![reading(0, 70.0, 5.0)];
    let wad = device_statistics(&rows, Device::Wad);

    assert_eq!(wad.valid_rows, 1);
    assert!(approx(wad.drop, 0.0));
    assert!(approx(wad.real_time_minutes, 1.0 / 6.0));
}

#[test]
fn estimates_exclude_non_positive_values() {
    let mut rows: Vec<_> = (0..4).map(|i| reading(i, 60.0, 5.0)).collect();
    rows[0].wad_duration = 0.0;
    rows[1].wad_duration = 45.0;
    rows[2].wad_duration = -1.0;
    rows[3].wad_duration = 30.0;

    let wad = device_statistics(&rows, Device::Wad);
    assert!(approx(wad.max_duration_estimate, 45.0));
    assert!(approx(wad.min_duration_estimate, 30.0));
}

#[test]
fn no_positive_estimate_gives_zero() {
    let mut rows: Vec<_> = (0..3).map(|i| reading(i, 60.0, 5.0)).collect();
    for r in &mut rows {
        r.ls_duration = -1.0;
    }
    let ls = device_statistics(&rows, Device::LightSource);
    assert_eq!(ls.max_duration_estimate, 0.0);
    assert_eq!(ls.min_duration_estimate, 0.0);
}

#[test]
fn time_to_one_minute_finds_first_low_estimate() {
    let mut rows: Vec<_> = (0..24).map(|i| reading(i, 10.0, 5.0)).collect();
    rows[12].wad_duration = 1.0;
    rows[18].wad_duration = 0.5;

    assert!(approx(time_to_one_minute(&rows, Device::Wad), 2.0));
}

#[test]
fn low_estimate_while_off_is_ignored() {
    let mut rows: Vec<_> = (0..12).map(|i| reading(i, 10.0, 5.0)).collect();
    rows[3].wad_battery = -1.0;
    rows[3].wad_duration = 0.0;

    assert!(approx(time_to_one_minute(&rows, Device::Wad), 2.0));
}

#[test]
fn report_keeps_statistics_when_timestamps_are_unreadable() {
    let mut rows = hour_session();
    rows[0].surgery_time = "bogus".to_string();
    let session = Session::new("bad", rows, SessionSummary::default());

    let report = Core::build_session_report(&session);
    assert!(approx(report.stats.wad.drop, 60.0));
    assert!(report.accuracy(Device::Wad).is_none());
    assert!(report.accuracy(Device::LightSource).is_none());
}

#[test]
fn report_carries_accuracy_for_readable_sessions() {
    let session = Session::new("ok", hour_session(), SessionSummary::default());
    let report = Core::build_session_report(&session);

    assert_eq!(report.accuracy(Device::Wad).map(<[_]>::len), Some(330));
    assert_eq!(report.accuracy(Device::LightSource).map(<[_]>::len), Some(360));
}
