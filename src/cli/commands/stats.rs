use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::accuracy::mean_absolute_error;
use crate::core::logic::{Core, SessionReport};
use crate::errors::AppResult;
use crate::models::device::Device;
use crate::models::session::Session;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_drop, colorize_optional};
use crate::utils::table::Table;
use crate::utils::{fmt_opt, fmt_value};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { files } = cmd {
        let set = super::load(files, cfg)?;

        for session in set.iter() {
            let report = Core::build_session_report(session);
            print_session(session, &report);
        }
    }
    Ok(())
}

fn print_session(session: &Session, report: &SessionReport) {
    header(session.display_name());

    let sm = &session.summary;
    println!(
        "Date: {} | Duration: {} min | Rows: {}",
        session.surgery_date(),
        session.duration_minutes(),
        session.rows.len()
    );
    println!(
        "WAD serial: {} | LS serial: {}",
        colorize_optional(sm.wad_serial.as_deref().unwrap_or("--")),
        colorize_optional(sm.ls_serial.as_deref().unwrap_or("--")),
    );
    println!();

    let mut table = Table::new(&["Metric", "WAD", "Light Source"]);
    let (w, l) = (&report.stats.wad, &report.stats.light_source);

    let rows: [(&str, String, String); 9] = [
        ("Initial", format!("{}%", fmt_value(w.initial, 0)), format!("{}%", fmt_value(l.initial, 0))),
        ("Final", format!("{}%", fmt_value(w.final_level, 0)), format!("{}%", fmt_value(l.final_level, 0))),
        ("Drop", colored_drop(w.drop), colored_drop(l.drop)),
        (
            "Avg consumption",
            format!("{} %/min", fmt_value(w.avg_consumption, 2)),
            format!("{} %/min", fmt_value(l.avg_consumption, 2)),
        ),
        (
            "Real time",
            format!("{} min", fmt_value(w.real_time_minutes, 1)),
            format!("{} min", fmt_value(l.real_time_minutes, 1)),
        ),
        (
            "Max estimate",
            format!("{} min", fmt_value(w.max_duration_estimate, 0)),
            format!("{} min", fmt_value(l.max_duration_estimate, 0)),
        ),
        (
            "Min estimate",
            format!("{} min", fmt_value(w.min_duration_estimate, 0)),
            format!("{} min", fmt_value(l.min_duration_estimate, 0)),
        ),
        (
            "Time to 1 min",
            format!("{} min", fmt_value(w.time_to_one_minute, 1)),
            format!("{} min", fmt_value(l.time_to_one_minute, 1)),
        ),
        (
            "Mean abs. error",
            mae(report, Device::Wad),
            mae(report, Device::LightSource),
        ),
    ];

    for (metric, wad, ls) in rows {
        table.add_row(vec![metric.to_string(), wad, ls]);
    }
    print!("{}", table.render());

    if !session.notes.trim().is_empty() {
        println!("\nNotes:");
        for line in textwrap::wrap(session.notes.trim(), 78) {
            println!("  {line}");
        }
    }
}

fn colored_drop(drop: f64) -> String {
    format!("{}{}%{}", color_for_drop(drop), fmt_value(drop, 1), RESET)
}

fn mae(report: &SessionReport, device: Device) -> String {
    let v = report.accuracy(device).and_then(mean_absolute_error);
    colorize_optional(&format!(
        "{}{}",
        fmt_opt(v, 1),
        if v.is_some() { " min" } else { "" }
    ))
}
