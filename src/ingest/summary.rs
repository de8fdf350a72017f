//! The summary TXT written next to each debug CSV.
//!
//! Parsing is a best-effort key scan: unknown lines are ignored and every
//! field is optional.

use crate::core::calculator::statistics::{DeviceStats, SessionStats};
use crate::models::session::{ReportedBattery, Session, SessionSummary};
use crate::utils::fmt_value;
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

const WAD_SECTION: &str = "WAD BATTERY";
const LS_SECTION: &str = "LIGHT SOURCE BATTERY";
const NOTES_SECTION: &str = "DEVELOPER NOTES";

static INITIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Initial:\s*(-?\d+(?:\.\d+)?)%").expect("valid regex"));
static FINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Final:\s*(-?\d+(?:\.\d+)?)%").expect("valid regex"));
static DROP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Drop:\s*(-?\d+(?:\.\d+)?)%").expect("valid regex"));
static AVG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Avg Consumption:\s*(-?\d+(?:\.\d+)?)%").expect("valid regex"));

pub fn parse_summary_text(text: &str) -> SessionSummary {
    let mut s = SessionSummary::default();

    for line in text.lines() {
        // Order matters: "Start Time:" must not be taken for a generic key.
        if let Some(v) = value_after(line, "SESSION NAME:") {
            s.session_name = Some(v);
        } else if let Some(v) = value_after(line, "Surgery Date:") {
            s.surgery_date = Some(v);
        } else if let Some(v) = value_after(line, "Start Time:") {
            s.start_time = Some(v);
        } else if let Some(v) = value_after(line, "End Time:") {
            s.end_time = Some(v);
        } else if let Some(v) = value_after(line, "Total Measurements:") {
            s.total_measurements = leading_int(&v).and_then(|n| usize::try_from(n).ok());
        } else if let Some(v) = value_after(line, "Duration:") {
            s.duration_minutes = leading_int(&v);
        } else if let Some(v) = value_after(line, "Light Source Serial:") {
            s.ls_serial = Some(v);
        } else if let Some(v) = value_after(line, "WAD Serial:") {
            s.wad_serial = Some(v);
        } else if let Some(v) = value_after(line, "Light Source Firmware:") {
            s.ls_firmware = Some(v);
        } else if let Some(v) = value_after(line, "WAD Firmware:") {
            s.wad_firmware = Some(v);
        }
    }

    // Notes: everything after the header and its underline.
    if let Some(idx) = text.find(NOTES_SECTION) {
        let notes: Vec<&str> = text[idx..].lines().skip(2).collect();
        let notes = notes.join("\n").trim().to_string();
        if !notes.is_empty() {
            s.notes = Some(notes);
        }
    }

    let notes_start = text.find(NOTES_SECTION).unwrap_or(text.len());
    if let Some(wad_start) = text.find(WAD_SECTION) {
        let wad_end = text.find(LS_SECTION).filter(|e| *e > wad_start).unwrap_or(notes_start);
        s.wad = reported_battery(&text[wad_start..wad_end.max(wad_start)]);
    }
    if let Some(ls_start) = text.find(LS_SECTION) {
        s.light_source = reported_battery(&text[ls_start..notes_start.max(ls_start)]);
    }

    s
}

fn value_after(line: &str, key: &str) -> Option<String> {
    line.find(key)
        .map(|i| line[i + key.len()..].trim().to_string())
        .filter(|v| !v.is_empty())
}

fn leading_int(v: &str) -> Option<i64> {
    let digits: String = v
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    digits.parse().ok()
}

fn reported_battery(section: &str) -> ReportedBattery {
    let grab = |re: &Regex| {
        re.captures(section)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
    };

    ReportedBattery {
        initial: grab(&INITIAL_RE),
        final_level: grab(&FINAL_RE),
        drop: grab(&DROP_RE),
        avg_consumption: grab(&AVG_RE),
    }
}

/// Render the summary TXT for a session. Values the device reported in the
/// loaded summary win; computed statistics fill the gaps.
pub fn render_summary_text(session: &Session, stats: &SessionStats) -> String {
    let sm = &session.summary;
    let na = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());
    let name = if session.custom_name.trim().is_empty() {
        "Unnamed".to_string()
    } else {
        session.custom_name.clone()
    };

    let mut out = String::new();
    let _ = writeln!(out, "BATTERY DEBUG SUMMARY");
    let _ = writeln!(out, "=====================");
    let _ = writeln!(out, "SESSION NAME: {name}");
    let _ = writeln!(out, "Surgery Date: {}", session.surgery_date());
    let _ = writeln!(out, "Start Time: {}", na(&sm.start_time));
    let _ = writeln!(out, "End Time: {}", na(&sm.end_time));
    let _ = writeln!(out, "Duration: {} minutes", session.duration_minutes());
    let _ = writeln!(out, "Total Measurements: {}", session.total_measurements());
    let _ = writeln!(out);
    let _ = writeln!(out, "DEVICE INFORMATION");
    let _ = writeln!(out, "==================");
    let _ = writeln!(out, "WAD Serial: {}", na(&sm.wad_serial));
    let _ = writeln!(out, "Light Source Serial: {}", na(&sm.ls_serial));
    if sm.wad_firmware.is_some() || sm.ls_firmware.is_some() {
        let _ = writeln!(out, "WAD Firmware: {}", na(&sm.wad_firmware));
        let _ = writeln!(out, "Light Source Firmware: {}", na(&sm.ls_firmware));
    }
    let _ = writeln!(out);
    write_battery_section(&mut out, WAD_SECTION, &sm.wad, &stats.wad);
    let _ = writeln!(out);
    write_battery_section(&mut out, LS_SECTION, &sm.light_source, &stats.light_source);

    if !session.notes.trim().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{NOTES_SECTION}");
        let _ = writeln!(out, "{}", "=".repeat(NOTES_SECTION.len()));
        let _ = writeln!(out, "{}", session.notes.trim_end());
    }

    out
}

fn write_battery_section(out: &mut String, title: &str, reported: &ReportedBattery, computed: &DeviceStats) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.len()));
    let _ = writeln!(
        out,
        "Initial: {}%",
        fmt_value(reported.initial.unwrap_or(computed.initial), 0)
    );
    let _ = writeln!(
        out,
        "Final: {}%",
        fmt_value(reported.final_level.unwrap_or(computed.final_level), 0)
    );
    let _ = writeln!(
        out,
        "Drop: {}%",
        fmt_value(reported.drop.unwrap_or(computed.drop), 2)
    );
    let _ = writeln!(
        out,
        "Avg Consumption: {}% per minute",
        fmt_value(reported.avg_consumption.unwrap_or(computed.avg_consumption), 3)
    );
}
