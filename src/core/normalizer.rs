//! Raw CSV record → canonical [`Reading`].
//!
//! Two policies coexist and must stay distinct:
//! - core telemetry (battery, duration, intensity) never carries forward;
//!   an empty or unparseable cell becomes the `-1` sentinel;
//! - debug-interface diagnostics carry the last good value forward, per
//!   field, within one session.

use crate::models::reading::{Diagnostics, OFF, Reading, UNKNOWN, columns};
use std::collections::HashMap;

/// One CSV row keyed by header name, as delivered by the tokenizer.
pub type RawRecord = HashMap<String, String>;

const DIAG_NUMERIC: [&str; 4] = [
    columns::ADB_CAPACITY,
    columns::ADB_CURRENT,
    columns::ADB_VOLTAGE,
    columns::ADB_TEMPERATURE,
];

const DIAG_TEXT: [&str; 2] = [columns::ADB_HEALTH, columns::ADB_STATUS];

/// Last successfully parsed diagnostic values of one session.
///
/// Start a fresh one for every file; never share it between sessions.
#[derive(Debug, Default, Clone)]
pub struct CarryForward {
    numeric: HashMap<&'static str, f64>,
    text: HashMap<&'static str, String>,
}

impl CarryForward {
    pub fn new() -> Self {
        Self::default()
    }

    fn number(&mut self, field: &'static str, raw: Option<&str>, marker: &str) -> f64 {
        let parsed = match raw.map(str::trim) {
            None => None,
            Some(s) if s.is_empty() || s == marker => None,
            Some(s) => parse_finite(s),
        };

        match parsed {
            Some(v) => {
                self.numeric.insert(field, v);
                v
            }
            None => self.numeric.get(field).copied().unwrap_or(OFF),
        }
    }

    fn text(&mut self, field: &'static str, raw: Option<&str>, marker: &str) -> String {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() && s != marker => {
                self.text.insert(field, s.to_string());
                s.to_string()
            }
            _ => self
                .text
                .get(field)
                .cloned()
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Normalize one record, threading the session's carry-forward memory.
/// The input record is left untouched.
pub fn normalize_record(raw: &RawRecord, marker: &str, memory: &mut CarryForward) -> Reading {
    let col = |name: &'static str| cell(raw, name);

    let [capacity, current_ua, voltage_uv, temperature_dc] =
        DIAG_NUMERIC.map(|f| memory.number(f, col(f), marker));
    let [health, status] = DIAG_TEXT.map(|f| memory.text(f, col(f), marker));

    Reading {
        surgery_time: col(columns::SURGERY_TIME)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),

        wad_battery: core_number(col(columns::WAD_BATTERY)),
        wad_duration: core_number(col(columns::WAD_DURATION)),
        wad_quality: col(columns::WAD_QUALITY)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),

        ls_battery: core_number(col(columns::LS_BATTERY)),
        ls_duration: core_number(col(columns::LS_DURATION)),
        ls_intensity: core_number(col(columns::LS_INTENSITY)),

        diag: Diagnostics {
            capacity,
            current_ua,
            voltage_uv,
            temperature_dc,
            health,
            status,
        },
    }
}

/// Normalize a whole session in one forward pass.
pub fn normalize_rows(records: &[RawRecord], marker: &str) -> Vec<Reading> {
    let mut memory = CarryForward::new();
    let rows: Vec<Reading> = records
        .iter()
        .map(|r| normalize_record(r, marker, &mut memory))
        .collect();

    log::debug!("normalized {} rows", rows.len());
    rows
}

fn cell<'a>(raw: &'a RawRecord, name: &str) -> Option<&'a str> {
    raw.get(name).map(String::as_str)
}

/// Core telemetry: absent, empty or unparseable → `-1`.
fn core_number(raw: Option<&str>) -> f64 {
    raw.and_then(|s| parse_finite(s.trim())).unwrap_or(OFF)
}

/// `NaN` and infinities parse fine in Rust but are not readings.
fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
