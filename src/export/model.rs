// src/export/model.rs

use crate::core::calculator::accuracy::AccuracyPoint;
use crate::core::calculator::diagnostics::{
    CapacityPoint, CorrelationPoint, CurrentPoint, HealthChange, HealthEntry, HeatmapBin, PowerPoint,
    TemperaturePoint, VoltagePoint,
};
use crate::core::calculator::statistics::DeviceStats;
use crate::models::reading::Reading;
use clap::ValueEnum;
use serde::Serialize;

/// Derived data that can be exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    Readings,
    Stats,
    Accuracy,
    Temperature,
    Current,
    Voltage,
    Power,
    Correlation,
    Capacity,
    Health,
    /// Rows where the reported health changes
    HealthChanges,
    Heatmap,
    Comparison,
    /// Summary TXT (only with --format txt)
    Summary,
}

/// A flat, tabular export row. JSON goes through serde; CSV through
/// `headers`/`cells` so that nested and optional fields stay flat.
pub trait ExportRow: Serialize {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

/// Row tagged with the session it comes from.
#[derive(Serialize, Clone, Debug)]
pub struct Tagged<T> {
    pub session: String,
    #[serde(flatten)]
    pub item: T,
}

impl<T: ExportRow> Tagged<T> {
    pub fn new(session: &str, item: T) -> Self {
        Self {
            session: session.to_string(),
            item,
        }
    }

    pub(crate) fn headers() -> Vec<&'static str> {
        let mut h = vec!["session"];
        h.extend(T::headers());
        h
    }

    pub(crate) fn cells(&self) -> Vec<String> {
        let mut c = vec![self.session.clone()];
        c.extend(self.item.cells());
        c
    }
}

fn num(v: f64) -> String {
    v.to_string()
}

fn opt(v: Option<f64>) -> String {
    v.map(num).unwrap_or_default()
}

#[derive(Serialize, Clone, Debug)]
pub struct StatsRow {
    pub device: &'static str,
    #[serde(flatten)]
    pub stats: DeviceStats,
}

#[derive(Serialize, Clone, Debug)]
pub struct AccuracyRow {
    pub device: &'static str,
    #[serde(flatten)]
    pub point: AccuracyPoint,
}

#[derive(Serialize, Clone, Debug)]
pub struct ComparisonRow {
    pub progress: String,
    pub wad: Option<f64>,
    pub light_source: Option<f64>,
}

impl ExportRow for Reading {
    fn headers() -> Vec<&'static str> {
        vec![
            "surgery_time",
            "wad_battery",
            "wad_duration",
            "wad_quality",
            "ls_battery",
            "ls_duration",
            "ls_intensity",
            "adb_capacity",
            "adb_current_ua",
            "adb_voltage_uv",
            "adb_temperature_dc",
            "adb_health",
            "adb_status",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.surgery_time.clone(),
            num(self.wad_battery),
            num(self.wad_duration),
            self.wad_quality.clone(),
            num(self.ls_battery),
            num(self.ls_duration),
            num(self.ls_intensity),
            num(self.diag.capacity),
            num(self.diag.current_ua),
            num(self.diag.voltage_uv),
            num(self.diag.temperature_dc),
            self.diag.health.clone(),
            self.diag.status.clone(),
        ]
    }
}

impl ExportRow for StatsRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "device",
            "initial",
            "final_level",
            "drop",
            "avg_consumption",
            "max_duration_estimate",
            "min_duration_estimate",
            "time_to_one_minute",
            "real_time_minutes",
            "valid_rows",
        ]
    }

    fn cells(&self) -> Vec<String> {
        let s = &self.stats;
        vec![
            self.device.to_string(),
            num(s.initial),
            num(s.final_level),
            num(s.drop),
            num(s.avg_consumption),
            num(s.max_duration_estimate),
            num(s.min_duration_estimate),
            num(s.time_to_one_minute),
            num(s.real_time_minutes),
            s.valid_rows.to_string(),
        ]
    }
}

impl ExportRow for AccuracyRow {
    fn headers() -> Vec<&'static str> {
        vec!["device", "time", "estimate", "actual", "error"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.device.to_string(),
            self.point.time.clone(),
            opt(self.point.estimate),
            num(self.point.actual),
            opt(self.point.error),
        ]
    }
}

impl ExportRow for ComparisonRow {
    fn headers() -> Vec<&'static str> {
        vec!["progress", "wad", "light_source"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.progress.clone(), opt(self.wad), opt(self.light_source)]
    }
}

impl ExportRow for TemperaturePoint {
    fn headers() -> Vec<&'static str> {
        vec!["time", "temperature_c", "battery"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.time.clone(), num(self.temperature), num(self.battery)]
    }
}

impl ExportRow for CurrentPoint {
    fn headers() -> Vec<&'static str> {
        vec!["time", "current_ma", "quality"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.time.clone(), num(self.current_ma), self.quality.clone()]
    }
}

impl ExportRow for VoltagePoint {
    fn headers() -> Vec<&'static str> {
        vec!["battery", "voltage_v", "time"]
    }

    fn cells(&self) -> Vec<String> {
        vec![num(self.battery), num(self.voltage), self.time.clone()]
    }
}

impl ExportRow for PowerPoint {
    fn headers() -> Vec<&'static str> {
        vec!["time", "power_mw"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.time.clone(), num(self.power_mw)]
    }
}

impl ExportRow for CorrelationPoint {
    fn headers() -> Vec<&'static str> {
        vec!["current_ma", "temperature_c", "time", "progress"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            num(self.current_ma),
            num(self.temperature),
            self.time.clone(),
            num(self.progress),
        ]
    }
}

impl ExportRow for CapacityPoint {
    fn headers() -> Vec<&'static str> {
        vec!["time", "reported_battery", "adb_capacity"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.time.clone(),
            num(self.reported_battery),
            num(self.adb_capacity),
        ]
    }
}

impl ExportRow for HealthEntry {
    fn headers() -> Vec<&'static str> {
        vec!["time", "health", "status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.time.clone(), self.health.clone(), self.status.clone()]
    }
}

impl ExportRow for HealthChange {
    fn headers() -> Vec<&'static str> {
        vec!["index", "time", "health"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.index.to_string(), self.time.clone(), self.health.clone()]
    }
}

impl ExportRow for HeatmapBin {
    fn headers() -> Vec<&'static str> {
        vec!["duration_min", "duration_max", "temp_min", "temp_max", "count"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            num(self.duration_min),
            num(self.duration_max),
            num(self.temp_min),
            num(self.temp_max),
            self.count.to_string(),
        ]
    }
}
