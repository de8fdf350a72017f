//! Self-reported remaining-time estimate vs. time actually left.
//!
//! "Actual" is a linear-progress heuristic anchored to the slice's own
//! endpoint: at row `i` of `n` the device had
//! `total_elapsed * (1 - i / (n - 1))` minutes left. It is a yardstick for
//! over/under-estimation bias, not a physical measurement.

use crate::core::validity::device_rows;
use crate::errors::AppResult;
use crate::models::device::Device;
use crate::models::reading::Reading;
use crate::utils::time::elapsed_minutes;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyPoint {
    pub time: String,
    /// `None` when the device was off or had no estimate.
    pub estimate: Option<f64>,
    pub actual: f64,
    pub error: Option<f64>,
}

/// One point per row of `valid_rows`, in row order.
///
/// `valid_rows` is expected to be the device's valid range already; use
/// [`device_accuracy`] to start from a whole session. Fails only when the
/// first or last timestamp cannot be parsed.
pub fn analyze_accuracy(valid_rows: &[Reading], device: Device) -> AppResult<Vec<AccuracyPoint>> {
    let (Some(first), Some(last)) = (valid_rows.first(), valid_rows.last()) else {
        return Ok(Vec::new());
    };

    let total = elapsed_minutes(&first.surgery_time, &last.surgery_time)?;
    let n = valid_rows.len();

    let points = valid_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let progress = if n > 1 {
                i as f64 / (n - 1) as f64
            } else {
                0.0
            };
            let actual = total * (1.0 - progress);

            let estimate = device.duration_estimate(row);
            let estimate = (device.battery(row) >= 0.0 && estimate >= 0.0).then_some(estimate);

            AccuracyPoint {
                time: row.surgery_time.clone(),
                estimate,
                actual,
                error: estimate.map(|e| (e - actual).abs()),
            }
        })
        .collect();

    Ok(points)
}

/// Accuracy over the device's valid range of a whole session.
pub fn device_accuracy(rows: &[Reading], device: Device) -> AppResult<Vec<AccuracyPoint>> {
    analyze_accuracy(device_rows(rows, device), device)
}

/// Mean absolute error over the points that carry an estimate.
pub fn mean_absolute_error(points: &[AccuracyPoint]) -> Option<f64> {
    let errors: Vec<f64> = points.iter().filter_map(|p| p.error).collect();
    if errors.is_empty() {
        None
    } else {
        Some(errors.iter().sum::<f64>() / errors.len() as f64)
    }
}
