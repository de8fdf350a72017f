use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::accuracy::{AccuracyPoint, mean_absolute_error};
use crate::core::calculator::comparison::sample_per_minute;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_error, colorize_optional};
use crate::utils::table::Table;
use crate::utils::{fmt_opt, fmt_value};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Accuracy {
        files,
        device,
        all_rows,
    } = cmd
    {
        let set = super::load(files, cfg)?;

        for session in set.iter() {
            header(format!("{} - {}", session.display_name(), device.label()));

            let Some(points) = Core::accuracy_or_warn(session, *device) else {
                warning("Unreadable start or end time, accuracy skipped for this session.");
                continue;
            };

            if points.is_empty() {
                println!("{} never reported in this session.", device.label());
                continue;
            }

            let shown = if *all_rows {
                points.clone()
            } else {
                sample_per_minute(&points)
            };

            let mut table = Table::new(&["Time", "Estimate", "Actual", "Error"]);
            for p in &shown {
                table.add_row(row(p));
            }
            print!("{}", table.render());

            println!(
                "\nMean absolute error: {} min over {} rows",
                fmt_opt(mean_absolute_error(&points), 2),
                points.len()
            );
        }
    }
    Ok(())
}

fn row(p: &AccuracyPoint) -> Vec<String> {
    let error = match p.error {
        Some(e) => format!("{}{}{}", color_for_error(e, p.actual), fmt_value(e, 1), RESET),
        None => colorize_optional("--"),
    };
    vec![
        p.time.clone(),
        colorize_optional(&fmt_opt(p.estimate, 1)),
        fmt_value(p.actual, 1),
        error,
    ]
}
