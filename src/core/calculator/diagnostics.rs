//! Engineering quantities derived from the WAD debug-interface columns.
//!
//! All transforms run over the WAD valid range. Rows whose diagnostic
//! fields are still `-1` are dropped here: carry-forward already happened
//! at normalization, so `-1` means no value has been seen yet.

use crate::core::validity::wad_rows;
use crate::models::reading::{ROWS_PER_MINUTE, Reading, UNKNOWN, is_off};
use serde::Serialize;

pub const HEATMAP_BINS: usize = 10;

fn celsius(raw_tenths: f64) -> f64 {
    raw_tenths / 10.0
}

fn milliamps(raw_ua: f64) -> f64 {
    raw_ua.abs() / 1_000.0
}

fn volts(raw_uv: f64) -> f64 {
    raw_uv / 1_000_000.0
}

fn minutes_at(index: usize) -> f64 {
    index as f64 / ROWS_PER_MINUTE as f64
}

// ---------------------------------------------------------------
// Temperature vs usage
// ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperaturePoint {
    pub time: String,
    pub temperature: f64,
    pub battery: f64,
}

pub fn temperature_vs_usage(rows: &[Reading]) -> Vec<TemperaturePoint> {
    wad_rows(rows)
        .iter()
        .filter(|r| !is_off(r.diag.temperature_dc) && !is_off(r.wad_battery))
        .map(|r| TemperaturePoint {
            time: r.surgery_time.clone(),
            temperature: celsius(r.diag.temperature_dc),
            battery: r.wad_battery,
        })
        .collect()
}

// ---------------------------------------------------------------
// Current consumption
// ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentPoint {
    pub time: String,
    /// Magnitude only; charge/discharge direction is not modeled.
    pub current_ma: f64,
    pub quality: String,
}

pub fn current_consumption(rows: &[Reading]) -> Vec<CurrentPoint> {
    wad_rows(rows)
        .iter()
        .filter(|r| !is_off(r.diag.current_ua))
        .map(|r| CurrentPoint {
            time: r.surgery_time.clone(),
            current_ma: milliamps(r.diag.current_ua),
            quality: r.wad_quality.clone(),
        })
        .collect()
}

// ---------------------------------------------------------------
// Voltage degradation
// ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoltagePoint {
    pub battery: f64,
    pub voltage: f64,
    pub time: String,
}

/// Sorted from the highest battery level down, whatever the row order.
pub fn voltage_degradation(rows: &[Reading]) -> Vec<VoltagePoint> {
    let mut points: Vec<VoltagePoint> = wad_rows(rows)
        .iter()
        .filter(|r| !is_off(r.diag.voltage_uv) && !is_off(r.wad_battery))
        .map(|r| VoltagePoint {
            battery: r.wad_battery,
            voltage: volts(r.diag.voltage_uv),
            time: r.surgery_time.clone(),
        })
        .collect();

    points.sort_by(|a, b| b.battery.total_cmp(&a.battery));
    points
}

// ---------------------------------------------------------------
// Power consumption
// ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerPoint {
    pub time: String,
    pub power_mw: f64,
}

pub fn power_consumption(rows: &[Reading]) -> Vec<PowerPoint> {
    wad_rows(rows)
        .iter()
        .filter(|r| !is_off(r.diag.voltage_uv) && !is_off(r.diag.current_ua))
        .map(|r| {
            let amps = r.diag.current_ua.abs() / 1_000_000.0;
            PowerPoint {
                time: r.surgery_time.clone(),
                power_mw: volts(r.diag.voltage_uv) * amps * 1_000.0,
            }
        })
        .collect()
}

// ---------------------------------------------------------------
// Temperature / current correlation
// ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPoint {
    pub current_ma: f64,
    pub temperature: f64,
    pub time: String,
    /// Position of the row in the valid range, 0..100.
    pub progress: f64,
}

pub fn temperature_current_correlation(rows: &[Reading]) -> Vec<CorrelationPoint> {
    let valid = wad_rows(rows);
    let len = valid.len() as f64;

    valid
        .iter()
        .enumerate()
        .filter(|(_, r)| !is_off(r.diag.temperature_dc) && !is_off(r.diag.current_ua))
        .map(|(i, r)| CorrelationPoint {
            current_ma: milliamps(r.diag.current_ua),
            temperature: celsius(r.diag.temperature_dc),
            time: r.surgery_time.clone(),
            progress: i as f64 / len * 100.0,
        })
        .collect()
}

// ---------------------------------------------------------------
// Capacity comparison
// ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityPoint {
    pub time: String,
    pub reported_battery: f64,
    pub adb_capacity: f64,
}

pub fn capacity_comparison(rows: &[Reading]) -> Vec<CapacityPoint> {
    wad_rows(rows)
        .iter()
        .filter(|r| !is_off(r.wad_battery) && !is_off(r.diag.capacity))
        .map(|r| CapacityPoint {
            time: r.surgery_time.clone(),
            reported_battery: r.wad_battery,
            adb_capacity: r.diag.capacity,
        })
        .collect()
}

// ---------------------------------------------------------------
// Battery health
// ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthEntry {
    pub time: String,
    pub health: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthChange {
    pub time: String,
    pub health: String,
    pub index: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HealthReport {
    pub timeline: Vec<HealthEntry>,
    /// Rows whose health differs from the previous recorded (non-Unknown) one.
    pub changes: Vec<HealthChange>,
}

pub fn battery_health(rows: &[Reading]) -> HealthReport {
    let valid = wad_rows(rows);
    let mut changes = Vec::new();
    let mut last: Option<&str> = None;

    for (index, r) in valid.iter().enumerate() {
        let health = r.diag.health.as_str();
        if health != UNKNOWN && last != Some(health) {
            changes.push(HealthChange {
                time: r.surgery_time.clone(),
                health: health.to_string(),
                index,
            });
            last = Some(health);
        }
    }

    let timeline = valid
        .iter()
        .map(|r| HealthEntry {
            time: r.surgery_time.clone(),
            health: r.diag.health.clone(),
            status: r.diag.status.clone(),
        })
        .collect();

    HealthReport { timeline, changes }
}

// ---------------------------------------------------------------
// Temperature / duration heatmap
// ---------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapBin {
    pub duration_min: f64,
    pub duration_max: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapSample {
    pub duration: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Heatmap {
    /// Row-major: duration bin outer, temperature bin inner.
    pub bins: Vec<HeatmapBin>,
    pub duration_range: (f64, f64),
    pub temp_range: (f64, f64),
    pub samples: Vec<HeatmapSample>,
}

impl Heatmap {
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

pub fn temperature_heatmap(rows: &[Reading]) -> Heatmap {
    temperature_heatmap_with_bins(rows, HEATMAP_BINS)
}

/// `bins x bins` histogram over (elapsed minutes, °C), spanning the observed
/// range of each axis. Every qualifying row lands in exactly one bin; a
/// zero-width axis puts everything in its first bin.
pub fn temperature_heatmap_with_bins(rows: &[Reading], bins: usize) -> Heatmap {
    let bins = bins.max(1);

    let samples: Vec<HeatmapSample> = wad_rows(rows)
        .iter()
        .enumerate()
        .filter(|(_, r)| !is_off(r.diag.temperature_dc) && !is_off(r.wad_duration))
        .map(|(i, r)| HeatmapSample {
            duration: minutes_at(i),
            temperature: celsius(r.diag.temperature_dc),
        })
        .collect();

    if samples.is_empty() {
        return Heatmap::default();
    }

    let (d_min, d_max) = bounds(samples.iter().map(|s| s.duration));
    let (t_min, t_max) = bounds(samples.iter().map(|s| s.temperature));
    let d_step = (d_max - d_min) / bins as f64;
    let t_step = (t_max - t_min) / bins as f64;

    let mut grid: Vec<HeatmapBin> = (0..bins)
        .flat_map(|i| {
            (0..bins).map(move |j| HeatmapBin {
                duration_min: d_min + i as f64 * d_step,
                duration_max: d_min + (i + 1) as f64 * d_step,
                temp_min: t_min + j as f64 * t_step,
                temp_max: t_min + (j + 1) as f64 * t_step,
                count: 0,
            })
        })
        .collect();

    for s in &samples {
        let di = bin_index(s.duration, d_min, d_step, bins);
        let ti = bin_index(s.temperature, t_min, t_step, bins);
        grid[di * bins + ti].count += 1;
    }

    Heatmap {
        bins: grid,
        duration_range: (d_min, d_max),
        temp_range: (t_min, t_max),
        samples,
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn bin_index(value: f64, min: f64, step: f64, bins: usize) -> usize {
    if step <= 0.0 {
        return 0;
    }
    (((value - min) / step).floor() as usize).min(bins - 1)
}
