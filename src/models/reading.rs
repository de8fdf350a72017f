use serde::Serialize;

/// Sentinel for "device off / no reading" on core telemetry fields.
pub const OFF: f64 = -1.0;

/// Placeholder for textual diagnostic fields never seen in the session.
pub const UNKNOWN: &str = "Unknown";

/// Rows are sampled every 10 seconds.
pub const ROWS_PER_MINUTE: usize = 6;

/// CSV header names as written by the acquisition tool.
pub mod columns {
    pub const SURGERY_TIME: &str = "Surgery Time";

    pub const WAD_BATTERY: &str = "WAD Battery %";
    pub const WAD_DURATION: &str = "WAD Duration (min)";
    pub const WAD_QUALITY: &str = "WAD Quality";

    pub const LS_BATTERY: &str = "Light Source %";
    pub const LS_DURATION: &str = "Light Source Duration (min)";
    pub const LS_INTENSITY: &str = "Light Source Intensity";

    pub const ADB_CAPACITY: &str = "WAD ADB Capacity";
    pub const ADB_CURRENT: &str = "WAD ADB Current (uA)";
    pub const ADB_VOLTAGE: &str = "WAD ADB Voltage (uV)";
    pub const ADB_TEMPERATURE: &str = "WAD ADB Temp (0.1°C)";
    pub const ADB_HEALTH: &str = "WAD ADB Health";
    pub const ADB_STATUS: &str = "WAD ADB Status";
}

/// `true` when the value is exactly the off sentinel.
///
/// A reading of `0` is a legitimate state (depleted but still reporting),
/// so this compares by value identity and never by threshold.
pub fn is_off(value: f64) -> bool {
    value == OFF
}

/// Low-level values reported by the WAD debug interface (ADB).
///
/// Units are the device-native ones: micro-amps, micro-volts and tenths of a
/// degree Celsius. A value of [`OFF`] means no value was ever seen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    pub capacity: f64,
    pub current_ua: f64,
    pub voltage_uv: f64,
    pub temperature_dc: f64,
    pub health: String,
    pub status: String,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self {
            capacity: OFF,
            current_ua: OFF,
            voltage_uv: OFF,
            temperature_dc: OFF,
            health: UNKNOWN.to_string(),
            status: UNKNOWN.to_string(),
        }
    }
}

/// One sampled row of a session, already normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub surgery_time: String, // HH:MM:SS wall clock

    pub wad_battery: f64,
    pub wad_duration: f64,
    pub wad_quality: String,

    pub ls_battery: f64,
    pub ls_duration: f64,
    pub ls_intensity: f64,

    pub diag: Diagnostics,
}

impl Default for Reading {
    fn default() -> Self {
        Self {
            surgery_time: String::new(),
            wad_battery: OFF,
            wad_duration: OFF,
            wad_quality: String::new(),
            ls_battery: OFF,
            ls_duration: OFF,
            ls_intensity: OFF,
            diag: Diagnostics::default(),
        }
    }
}
