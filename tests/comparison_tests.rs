mod common;

use common::{hour_session, reading};
use rbattlog::core::calculator::comparison::{
    COMPARISON_POINTS, battery_series, compare_sessions, progress_labels, resample_progress,
    sample_per_minute,
};
use rbattlog::models::session::{Session, SessionSummary};

#[test]
fn resample_takes_every_nth_value() {
    let values: Vec<f64> = (0..1000).map(|v| v as f64).collect();
    let out = resample_progress(&values, COMPARISON_POINTS);

    assert_eq!(out.len(), 100);
    assert_eq!(out[0], Some(0.0));
    assert_eq!(out[1], Some(10.0));
    assert_eq!(out[99], Some(990.0));
}

#[test]
fn resample_pads_short_series() {
    let values = vec![5.0, 4.0, 3.0];
    let out = resample_progress(&values, 10);

    assert_eq!(out.len(), 10);
    assert_eq!(&out[..3], &[Some(5.0), Some(4.0), Some(3.0)]);
    assert!(out[3..].iter().all(Option::is_none));
}

#[test]
fn resample_uneven_length_is_truncated() {
    let values: Vec<f64> = (0..250).map(|v| v as f64).collect();
    let out = resample_progress(&values, 100);

    // step 2: 125 candidates, only the first 100 kept
    assert_eq!(out.len(), 100);
    assert_eq!(out[99], Some(198.0));
}

#[test]
fn resample_empty_series() {
    let out = resample_progress(&[], 4);
    assert_eq!(out, vec![None; 4]);
}

#[test]
fn progress_axis_labels() {
    let labels = progress_labels(100);
    assert_eq!(labels.len(), 100);
    assert_eq!(labels[0], "0%");
    assert_eq!(labels[99], "99%");
}

#[test]
fn per_minute_sampling_keeps_the_last_row() {
    let items: Vec<usize> = (0..14).collect();
    assert_eq!(sample_per_minute(&items), vec![0, 6, 12, 13]);

    let exact: Vec<usize> = (0..13).collect();
    assert_eq!(sample_per_minute(&exact), vec![0, 6, 12]);

    let empty: Vec<usize> = Vec::new();
    assert!(sample_per_minute(&empty).is_empty());
}

#[test]
fn series_cover_every_row() {
    let rows = hour_session();
    let series = battery_series(&rows);

    assert_eq!(series.labels.len(), 360);
    assert_eq!(series.wad_battery[359], -1.0);
    assert_eq!(series.labels[1], "08:00:10");
}

#[test]
fn curves_are_labelled_with_duration() {
    let long = Session::new("a", hour_session(), SessionSummary::default());
    let short = Session::new(
        "b",
        (0..30).map(|i| reading(i, 90.0, 5.0)).collect(),
        SessionSummary {
            session_name: Some("Knee".to_string()),
            ..SessionSummary::default()
        },
    );

    let curves = compare_sessions(&[&long, &short], COMPARISON_POINTS);
    assert_eq!(curves.len(), 2);
    assert_eq!(curves[0].label, "a (60min)");
    assert_eq!(curves[1].label, "Knee (5min)");
    assert_eq!(curves[0].wad.len(), 100);
    assert_eq!(curves[1].light_source.iter().filter(|v| v.is_some()).count(), 30);
}
