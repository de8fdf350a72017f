// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{ExportRow, Tagged};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: ExportRow>(rows: &[Tagged<T>], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;
    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with a `session` column in front of the row's own columns.
pub(crate) fn export_csv<T: ExportRow>(rows: &[Tagged<T>], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(Tagged::<T>::headers())?;

    for row in rows {
        wtr.write_record(row.cells())?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export plain text as-is.
pub(crate) fn export_text(content: &str, path: &Path) -> AppResult<()> {
    info(format!("Writing summary: {}", path.display()));

    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;

    notify_export_success("TXT", path);
    Ok(())
}
