use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::comparison::{compare_sessions, progress_labels};
use crate::core::calculator::statistics::compute_statistics;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::table::Table;
use crate::utils::{fmt_opt, fmt_value};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compare { files, curves } = cmd {
        let set = super::load(files, cfg)?;
        if set.len() < 2 {
            return Err(AppError::NotEnoughSessions(set.len()));
        }

        let ordered = set.chronological(&cfg.date_formats);

        header("Comparison");
        let mut table = Table::new(&[
            "Session", "Date", "Duration", "WAD Initial", "WAD Final", "WAD Drop", "LS Initial",
            "LS Final", "LS Drop",
        ]);
        for s in &ordered {
            let st = compute_statistics(&s.rows);
            let rep = &s.summary;
            table.add_row(vec![
                s.display_name().to_string(),
                s.surgery_date().to_string(),
                format!("{} min", s.duration_minutes()),
                format!("{}%", fmt_value(rep.wad.initial.unwrap_or(st.wad.initial), 0)),
                format!("{}%", fmt_value(rep.wad.final_level.unwrap_or(st.wad.final_level), 0)),
                format!("{}%", fmt_value(rep.wad.drop.unwrap_or(st.wad.drop), 1)),
                format!("{}%", fmt_value(rep.light_source.initial.unwrap_or(st.light_source.initial), 0)),
                format!("{}%", fmt_value(rep.light_source.final_level.unwrap_or(st.light_source.final_level), 0)),
                format!("{}%", fmt_value(rep.light_source.drop.unwrap_or(st.light_source.drop), 1)),
            ]);
        }
        print!("{}", table.render());

        if *curves {
            let compared = compare_sessions(&ordered, cfg.comparison_points);
            let labels = progress_labels(cfg.comparison_points);

            header("Battery curves (WAD / LS)");
            let mut headers = vec!["Progress".to_string()];
            headers.extend(compared.iter().map(|c| c.label.clone()));
            let refs: Vec<&str> = headers.iter().map(String::as_str).collect();
            let mut t = Table::new(&refs);

            for (i, label) in labels.iter().enumerate() {
                let mut row = vec![label.clone()];
                row.extend(
                    compared
                        .iter()
                        .map(|c| format!("{} / {}", fmt_opt(c.wad[i], 0), fmt_opt(c.light_source[i], 0))),
                );
                t.add_row(row);
            }
            print!("{}", t.render());
        }
    }
    Ok(())
}
