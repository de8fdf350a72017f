// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Check that a file may be created or overwritten.
///
/// - missing file → Ok
/// - existing file and `force` → Ok
/// - existing file without `force` → ask on an interactive terminal,
///   refuse otherwise.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if !io::stdin().is_terminal() {
        return Err(AppError::Export(format!(
            "{} exists; use --force to overwrite",
            path.display()
        )));
    }

    eprint!("Overwrite? [y/N]: ");
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
