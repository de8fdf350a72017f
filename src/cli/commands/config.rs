use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use crate::utils::path::expand_tilde;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration is valid");
            } else {
                for p in &problems {
                    warning(p);
                }
                return Err(AppError::Config(format!(
                    "{} problem(s) found in {}",
                    problems.len(),
                    path.display()
                )));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{editor_to_use}'"));
                }
                _ => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));
                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited using fallback '{default_editor}'"
                        )),
                        _ => error(format!(
                            "Failed to edit configuration file using fallback '{default_editor}'"
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}
