//! Chart series: per-minute sampling for single sessions and the 0–99%
//! progress resampling used to overlay sessions of different lengths.

use crate::models::reading::{ROWS_PER_MINUTE, Reading};
use crate::models::session::Session;
use serde::Serialize;

pub const COMPARISON_POINTS: usize = 100;

/// The six core series of a session, one entry per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatterySeries {
    pub labels: Vec<String>,
    pub wad_battery: Vec<f64>,
    pub wad_duration: Vec<f64>,
    pub wad_quality: Vec<String>,
    pub ls_battery: Vec<f64>,
    pub ls_duration: Vec<f64>,
    pub ls_intensity: Vec<f64>,
}

pub fn battery_series(rows: &[Reading]) -> BatterySeries {
    BatterySeries {
        labels: rows.iter().map(|r| r.surgery_time.clone()).collect(),
        wad_battery: rows.iter().map(|r| r.wad_battery).collect(),
        wad_duration: rows.iter().map(|r| r.wad_duration).collect(),
        wad_quality: rows.iter().map(|r| r.wad_quality.clone()).collect(),
        ls_battery: rows.iter().map(|r| r.ls_battery).collect(),
        ls_duration: rows.iter().map(|r| r.ls_duration).collect(),
        ls_intensity: rows.iter().map(|r| r.ls_intensity).collect(),
    }
}

/// Every 6th element (one per minute), plus the final element so the
/// curve reaches the end of the recording.
pub fn sample_per_minute<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = items.iter().step_by(ROWS_PER_MINUTE).cloned().collect();
    if let Some(last) = items.last()
        && (items.len() - 1) % ROWS_PER_MINUTE != 0
    {
        out.push(last.clone());
    }
    out
}

/// Resample a series onto exactly `points` slots of session progress.
///
/// Takes every `floor(len / points)`-th value (at least every value), keeps
/// the first `points` of them and pads the tail with `None` when the series
/// is too short to fill the axis.
pub fn resample_progress(values: &[f64], points: usize) -> Vec<Option<f64>> {
    let step = (values.len() / points.max(1)).max(1);
    log::debug!("resampling {} values with step {}", values.len(), step);

    let mut out: Vec<Option<f64>> = values
        .iter()
        .step_by(step)
        .take(points)
        .map(|v| Some(*v))
        .collect();
    out.resize(points, None);
    out
}

/// `0%`, `1%`, … for an axis of `points` slots.
pub fn progress_labels(points: usize) -> Vec<String> {
    (0..points).map(|i| format!("{i}%")).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonCurve {
    pub session_id: String,
    pub label: String,
    pub wad: Vec<Option<f64>>,
    pub light_source: Vec<Option<f64>>,
}

/// Battery curves of each session on a common progress axis. Uses the full
/// row sequence, not the device valid ranges.
pub fn compare_sessions(sessions: &[&Session], points: usize) -> Vec<ComparisonCurve> {
    sessions
        .iter()
        .map(|s| {
            let series = battery_series(&s.rows);
            ComparisonCurve {
                session_id: s.id.clone(),
                label: format!("{} ({}min)", s.display_name(), s.duration_minutes()),
                wad: resample_progress(&series.wad_battery, points),
                light_source: resample_progress(&series.ls_battery, points),
            }
        })
        .collect()
}
