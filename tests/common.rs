#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rbattlog::models::reading::Reading;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "Surgery Time,WAD Battery %,WAD Duration (min),WAD Quality,Light Source %,Light Source Duration (min),Light Source Intensity,WAD ADB Capacity,WAD ADB Current (uA),WAD ADB Voltage (uV),WAD ADB Temp (0.1°C),WAD ADB Health,WAD ADB Status";

pub fn rbl() -> Command {
    cargo_bin_cmd!("rbattlog")
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rbattlog_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Wall clock of row `i` for a recording starting at 08:00:00
pub fn clock(i: usize) -> String {
    let secs = 8 * 3600 + i * 10;
    format!("{:02}:{:02}:{:02}", (secs / 3600) % 24, (secs / 60) % 60, secs % 60)
}

/// A row with both devices on and no debug data
pub fn reading(i: usize, wad_battery: f64, ls_intensity: f64) -> Reading {
    Reading {
        surgery_time: clock(i),
        wad_battery,
        wad_duration: 120.0,
        wad_quality: "HD".to_string(),
        ls_battery: 90.0,
        ls_duration: 200.0,
        ls_intensity,
        ..Reading::default()
    }
}

/// Same row with every debug-interface field set
pub fn debug_reading(i: usize, battery: f64, temp_dc: f64, current_ua: f64, voltage_uv: f64) -> Reading {
    let mut r = reading(i, battery, 5.0);
    r.diag.temperature_dc = temp_dc;
    r.diag.current_ua = current_ua;
    r.diag.voltage_uv = voltage_uv;
    r.diag.capacity = battery;
    r.diag.health = "Good".to_string();
    r.diag.status = "Discharging".to_string();
    r
}

/// One hour at 10 s cadence: WAD drains 100 → 40 over 330 rows, then is
/// off for the last 30.
pub fn hour_session() -> Vec<Reading> {
    (0..360)
        .map(|i| {
            let battery = if i < 330 {
                100.0 - 60.0 * i as f64 / 329.0
            } else {
                -1.0
            };
            reading(i, battery, 5.0)
        })
        .collect()
}

/// CSV line for a row in the acquisition tool's column order
pub fn csv_line(r: &Reading) -> String {
    let n = |v: f64| if v == -1.0 { "-1".to_string() } else { v.to_string() };
    let d = |v: f64| if v == -1.0 { "--".to_string() } else { v.to_string() };
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{}",
        r.surgery_time,
        n(r.wad_battery),
        n(r.wad_duration),
        r.wad_quality,
        n(r.ls_battery),
        n(r.ls_duration),
        n(r.ls_intensity),
        d(r.diag.capacity),
        d(r.diag.current_ua),
        d(r.diag.voltage_uv),
        d(r.diag.temperature_dc),
        if r.diag.health == "Unknown" { "--" } else { r.diag.health.as_str() },
        if r.diag.status == "Unknown" { "--" } else { r.diag.status.as_str() },
    )
}

pub fn write_csv(dir: &Path, name: &str, rows: &[Reading]) -> PathBuf {
    let mut content = String::from(HEADER);
    content.push('\n');
    for r in rows {
        content.push_str(&csv_line(r));
        content.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, content).expect("write csv");
    path
}

pub fn write_summary(dir: &Path, name: &str, date: &str, session_name: &str) -> PathBuf {
    let content = format!(
        "BATTERY DEBUG SUMMARY
=====================
SESSION NAME: {session_name}
Surgery Date: {date}
Start Time: 08:00:00
End Time: 09:00:00
Duration: 60 minutes
Total Measurements: 360

DEVICE INFORMATION
==================
WAD Serial: WAD-001
Light Source Serial: LS-042

WAD BATTERY
-----------
Initial: 100%
Final: 40%
Drop: 60.00%
Avg Consumption: 1.091% per minute

LIGHT SOURCE BATTERY
--------------------
Initial: 90%
Final: 90%
Drop: 0.00%
Avg Consumption: 0.000% per minute
"
    );
    let path = dir.join(name);
    fs::write(&path, content).expect("write summary");
    path
}

/// A config path that does not exist, so the defaults apply
pub fn no_config(dir: &Path) -> String {
    dir.join("missing.conf").to_string_lossy().to_string()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
