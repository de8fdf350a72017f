//! Summary metrics per device over its valid range.

use crate::core::validity::device_rows;
use crate::models::device::Device;
use crate::models::reading::{ROWS_PER_MINUTE, Reading};
use serde::Serialize;

/// An estimate at or below this many minutes counts as "about to die".
pub const LOW_ESTIMATE_MINUTES: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DeviceStats {
    pub initial: f64,
    pub final_level: f64,
    /// `initial - final_level`; negative when the battery went up.
    pub drop: f64,
    /// Percentage points per minute.
    pub avg_consumption: f64,
    pub max_duration_estimate: f64,
    pub min_duration_estimate: f64,
    pub time_to_one_minute: f64,
    pub real_time_minutes: f64,
    pub valid_rows: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SessionStats {
    pub wad: DeviceStats,
    pub light_source: DeviceStats,
}

impl SessionStats {
    pub fn device(&self, device: Device) -> &DeviceStats {
        match device {
            Device::Wad => &self.wad,
            Device::LightSource => &self.light_source,
        }
    }
}

pub fn compute_statistics(rows: &[Reading]) -> SessionStats {
    SessionStats {
        wad: device_statistics(rows, Device::Wad),
        light_source: device_statistics(rows, Device::LightSource),
    }
}

/// Every step degrades to `0` on missing data; the result never holds `NaN`.
pub fn device_statistics(rows: &[Reading], device: Device) -> DeviceStats {
    let valid = device_rows(rows, device);
    let battery = |r: &Reading| device.battery(r);

    // Leading -1 rows may still sit inside the valid range.
    let first = valid.iter().map(battery).find(|v| *v >= 0.0);
    let last = valid.iter().rev().map(battery).find(|v| *v >= 0.0);

    let real_time_minutes = valid.len() as f64 / ROWS_PER_MINUTE as f64;

    let (initial, final_level, drop) = match (first, last) {
        (Some(i), Some(f)) => (i, f, i - f),
        _ => (0.0, 0.0, 0.0),
    };

    if drop < 0.0 {
        log::warn!(
            "{} battery went up by {:.1} points over the session",
            device.label(),
            -drop
        );
    }

    let avg_consumption = if real_time_minutes > 0.0 {
        drop / real_time_minutes
    } else {
        0.0
    };

    let estimates: Vec<f64> = valid
        .iter()
        .map(|r| device.duration_estimate(r))
        .filter(|v| *v > 0.0)
        .collect();

    let max_duration_estimate = estimates.iter().copied().fold(None, |acc: Option<f64>, v| {
        Some(acc.map_or(v, |a| a.max(v)))
    });
    let min_duration_estimate = estimates.iter().copied().fold(None, |acc: Option<f64>, v| {
        Some(acc.map_or(v, |a| a.min(v)))
    });

    DeviceStats {
        initial,
        final_level,
        drop,
        avg_consumption,
        max_duration_estimate: max_duration_estimate.unwrap_or(0.0),
        min_duration_estimate: min_duration_estimate.unwrap_or(0.0),
        time_to_one_minute: time_to_one_minute(rows, device),
        real_time_minutes,
        valid_rows: valid.len(),
    }
}

/// Minutes until the device first reports an estimate of at most one
/// minute while on. Scans the whole session, not the valid range; when the
/// estimate never gets that low the whole recording length is returned.
pub fn time_to_one_minute(rows: &[Reading], device: Device) -> f64 {
    let per_minute = ROWS_PER_MINUTE as f64;

    rows.iter()
        .position(|r| {
            let estimate = device.duration_estimate(r);
            device.battery(r) >= 0.0 && estimate >= 0.0 && estimate <= LOW_ESTIMATE_MINUTES
        })
        .map_or(rows.len() as f64 / per_minute, |i| i as f64 / per_minute)
}
