use crate::cli::parser::{Commands, DiagnosticKind};
use crate::config::Config;
use crate::core::calculator::comparison::sample_per_minute;
use crate::core::calculator::diagnostics::{self as diag, Heatmap};
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages::{header, warning};
use crate::utils::fmt_value;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Diagnostics { files, kind, bins } = cmd {
        let set = super::load(files, cfg)?;
        let bins = bins.unwrap_or(cfg.heatmap_bins);

        for session in set.iter() {
            header(format!("{} - {:?}", session.display_name(), kind));
            print_kind(session, *kind, bins);
        }
    }
    Ok(())
}

fn print_kind(session: &Session, kind: DiagnosticKind, bins: usize) {
    let rows = &session.rows;

    let table = match kind {
        DiagnosticKind::Temperature => {
            let mut t = Table::new(&["Time", "Temp (°C)", "Battery"]);
            for p in sample_per_minute(&diag::temperature_vs_usage(rows)) {
                t.add_row(vec![p.time, fmt_value(p.temperature, 1), format!("{}%", fmt_value(p.battery, 0))]);
            }
            t
        }
        DiagnosticKind::Current => {
            let mut t = Table::new(&["Time", "Current (mA)", "Quality"]);
            for p in sample_per_minute(&diag::current_consumption(rows)) {
                t.add_row(vec![p.time, fmt_value(p.current_ma, 1), p.quality]);
            }
            t
        }
        DiagnosticKind::Voltage => {
            let mut t = Table::new(&["Battery", "Voltage (V)", "Time"]);
            for p in sample_per_minute(&diag::voltage_degradation(rows)) {
                t.add_row(vec![format!("{}%", fmt_value(p.battery, 0)), fmt_value(p.voltage, 3), p.time]);
            }
            t
        }
        DiagnosticKind::Power => {
            let mut t = Table::new(&["Time", "Power (mW)"]);
            for p in sample_per_minute(&diag::power_consumption(rows)) {
                t.add_row(vec![p.time, fmt_value(p.power_mw, 1)]);
            }
            t
        }
        DiagnosticKind::Correlation => {
            let mut t = Table::new(&["Current (mA)", "Temp (°C)", "Time", "Progress"]);
            for p in sample_per_minute(&diag::temperature_current_correlation(rows)) {
                t.add_row(vec![
                    fmt_value(p.current_ma, 1),
                    fmt_value(p.temperature, 1),
                    p.time,
                    format!("{}%", fmt_value(p.progress, 0)),
                ]);
            }
            t
        }
        DiagnosticKind::Capacity => {
            let mut t = Table::new(&["Time", "Reported", "ADB capacity", "Delta"]);
            for p in sample_per_minute(&diag::capacity_comparison(rows)) {
                t.add_row(vec![
                    p.time,
                    format!("{}%", fmt_value(p.reported_battery, 0)),
                    format!("{}%", fmt_value(p.adb_capacity, 0)),
                    fmt_value(p.reported_battery - p.adb_capacity, 0),
                ]);
            }
            t
        }
        DiagnosticKind::Health => {
            let report = diag::battery_health(rows);
            let mut t = Table::new(&["Row", "Time", "Health"]);
            for c in report.changes {
                t.add_row(vec![c.index.to_string(), c.time, c.health]);
            }
            println!("{} rows in the WAD valid range", report.timeline.len());
            t
        }
        DiagnosticKind::Heatmap => {
            print_heatmap(&diag::temperature_heatmap_with_bins(rows, bins), bins);
            return;
        }
    };

    if table.rows.is_empty() {
        warning("No debug-interface data in this session.");
        return;
    }
    print!("{}", table.render());
}

/// Temperature bins top-down (hottest first), duration bins left to right.
fn print_heatmap(map: &Heatmap, bins: usize) {
    if map.bins.is_empty() {
        warning("No debug-interface data in this session.");
        return;
    }

    println!(
        "Duration {}-{} min, temperature {}-{} °C, {} samples\n",
        fmt_value(map.duration_range.0, 1),
        fmt_value(map.duration_range.1, 1),
        fmt_value(map.temp_range.0, 1),
        fmt_value(map.temp_range.1, 1),
        map.total_count()
    );

    let mut headers = vec!["°C".to_string()];
    headers.extend((0..bins).map(|i| format!("d{i}")));
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    let mut t = Table::new(&header_refs);

    for j in (0..bins).rev() {
        let mut row = vec![fmt_value(map.bins[j].temp_min, 1)];
        row.extend((0..bins).map(|i| {
            let c = map.bins[i * bins + j].count;
            if c == 0 { ".".to_string() } else { c.to_string() }
        }));
        t.add_row(row);
    }
    print!("{}", t.render());
}
