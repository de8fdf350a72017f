use super::reading::{ROWS_PER_MINUTE, Reading};
use serde::Serialize;
use std::path::PathBuf;

/// Battery figures a device reported in the summary TXT.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportedBattery {
    pub initial: Option<f64>,
    pub final_level: Option<f64>,
    pub drop: Option<f64>,
    pub avg_consumption: Option<f64>,
}

/// Header metadata parsed from the summary TXT that ships with a CSV.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionSummary {
    pub surgery_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration_minutes: Option<i64>,
    pub total_measurements: Option<usize>,
    pub wad_serial: Option<String>,
    pub ls_serial: Option<String>,
    pub wad_firmware: Option<String>,
    pub ls_firmware: Option<String>,
    pub session_name: Option<String>,
    pub notes: Option<String>,
    pub wad: ReportedBattery,
    pub light_source: ReportedBattery,
}

/// One surgical procedure's recording.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: String,
    pub rows: Vec<Reading>,
    pub summary: SessionSummary,
    pub custom_name: String,
    pub notes: String,

    #[serde(skip)]
    pub csv_path: Option<PathBuf>,
    #[serde(skip)]
    pub summary_path: Option<PathBuf>,
}

impl Session {
    /// Build a session; name and notes come from the summary when present.
    pub fn new(id: impl Into<String>, rows: Vec<Reading>, summary: SessionSummary) -> Self {
        let id = id.into();
        let custom_name = summary
            .session_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| id.clone());
        let notes = summary.notes.clone().unwrap_or_default();

        Self {
            id,
            rows,
            summary,
            custom_name,
            notes,
            csv_path: None,
            summary_path: None,
        }
    }

    pub fn with_paths(mut self, csv: Option<PathBuf>, summary: Option<PathBuf>) -> Self {
        self.csv_path = csv;
        self.summary_path = summary;
        self
    }

    pub fn display_name(&self) -> &str {
        if !self.custom_name.trim().is_empty() {
            &self.custom_name
        } else {
            self.summary.surgery_date.as_deref().unwrap_or(&self.id)
        }
    }

    pub fn surgery_date(&self) -> &str {
        self.summary.surgery_date.as_deref().unwrap_or("Unknown")
    }

    /// Duration declared in the summary, else derived from the row count.
    pub fn duration_minutes(&self) -> i64 {
        self.summary
            .duration_minutes
            .unwrap_or((self.rows.len() / ROWS_PER_MINUTE) as i64)
    }

    pub fn total_measurements(&self) -> usize {
        self.summary.total_measurements.unwrap_or(self.rows.len())
    }
}
