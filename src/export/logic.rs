// src/export/logic.rs

use crate::config::Config;
use crate::core::calculator::comparison::{compare_sessions, progress_labels};
use crate::core::calculator::diagnostics;
use crate::core::calculator::statistics::{compute_statistics, device_statistics};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json, export_text};
use crate::export::model::{AccuracyRow, ComparisonRow, Dataset, ExportRow, StatsRow, Tagged};
use crate::ingest::{summary::render_summary_text, summary_name_for};
use crate::models::device::Device;
use crate::models::session::Session;
use crate::models::session_set::SessionSet;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// Export options collected from the command line.
pub struct ExportRequest<'a> {
    pub format: ExportFormat,
    pub dataset: Dataset,
    pub file: Option<&'a Path>,
    pub device: Option<Device>,
    pub force: bool,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(set: &SessionSet, cfg: &Config, req: &ExportRequest) -> AppResult<()> {
        match (req.format, req.dataset) {
            (ExportFormat::Txt, Dataset::Summary) => return Self::export_summaries(set, req),
            (ExportFormat::Txt, other) => {
                return Err(AppError::InvalidExportFormat(format!(
                    "txt only applies to the summary dataset, not {other:?}"
                )));
            }
            (fmt, Dataset::Summary) => {
                return Err(AppError::InvalidExportFormat(format!(
                    "summary can only be exported as txt, not {}",
                    fmt.as_str()
                )));
            }
            _ => {}
        }

        let path = req
            .file
            .ok_or_else(|| AppError::Export("--file is required for this export".to_string()))?;
        ensure_writable(path, req.force)?;

        let devices: Vec<Device> = match req.device {
            Some(d) => vec![d],
            None => Device::ALL.to_vec(),
        };

        match req.dataset {
            Dataset::Readings => write(
                req.format,
                path,
                per_session(set, |s| s.rows.clone()),
            ),
            Dataset::Stats => write(
                req.format,
                path,
                per_session(set, |s| {
                    devices
                        .iter()
                        .map(|d| StatsRow {
                            device: d.code(),
                            stats: device_statistics(&s.rows, *d),
                        })
                        .collect()
                }),
            ),
            Dataset::Accuracy => {
                let mut rows = Vec::new();
                for s in set.iter() {
                    for d in &devices {
                        let Some(points) = Core::accuracy_or_warn(s, *d) else {
                            warning(format!("{}: {} accuracy skipped (unreadable time)", s.id, d.label()));
                            continue;
                        };
                        for point in points {
                            rows.push(Tagged::new(&s.id, AccuracyRow { device: d.code(), point }));
                        }
                    }
                }
                write(req.format, path, rows)
            }
            Dataset::Temperature => write(
                req.format,
                path,
                per_session(set, |s| diagnostics::temperature_vs_usage(&s.rows)),
            ),
            Dataset::Current => write(
                req.format,
                path,
                per_session(set, |s| diagnostics::current_consumption(&s.rows)),
            ),
            Dataset::Voltage => write(
                req.format,
                path,
                per_session(set, |s| diagnostics::voltage_degradation(&s.rows)),
            ),
            Dataset::Power => write(
                req.format,
                path,
                per_session(set, |s| diagnostics::power_consumption(&s.rows)),
            ),
            Dataset::Correlation => write(
                req.format,
                path,
                per_session(set, |s| diagnostics::temperature_current_correlation(&s.rows)),
            ),
            Dataset::Capacity => write(
                req.format,
                path,
                per_session(set, |s| diagnostics::capacity_comparison(&s.rows)),
            ),
            Dataset::Health => write(
                req.format,
                path,
                per_session(set, |s| diagnostics::battery_health(&s.rows).timeline),
            ),
            Dataset::HealthChanges => write(
                req.format,
                path,
                per_session(set, |s| diagnostics::battery_health(&s.rows).changes),
            ),
            Dataset::Heatmap => write(
                req.format,
                path,
                per_session(set, |s| {
                    diagnostics::temperature_heatmap_with_bins(&s.rows, cfg.heatmap_bins).bins
                }),
            ),
            Dataset::Comparison => {
                let ordered = set.chronological(&cfg.date_formats);
                let labels = progress_labels(cfg.comparison_points);
                let mut rows = Vec::new();
                for curve in compare_sessions(&ordered, cfg.comparison_points) {
                    for (i, label) in labels.iter().enumerate() {
                        rows.push(Tagged::new(
                            &curve.session_id,
                            ComparisonRow {
                                progress: label.clone(),
                                wad: curve.wad[i],
                                light_source: curve.light_source[i],
                            },
                        ));
                    }
                }
                write(req.format, path, rows)
            }
            Dataset::Summary => Err(AppError::InvalidExportFormat(req.format.as_str().to_string())),
        }
    }

    /// Write one summary TXT per session. With several sessions each file
    /// goes next to its CSV (overwriting the summary it was loaded from).
    fn export_summaries(set: &SessionSet, req: &ExportRequest) -> AppResult<()> {
        if req.file.is_some() && set.len() > 1 {
            return Err(AppError::Export(
                "--file can only be used with a single session for txt export".to_string(),
            ));
        }

        for s in set.iter() {
            let path = match req.file {
                Some(p) => p.to_path_buf(),
                None => default_summary_path(s),
            };
            ensure_writable(&path, req.force)?;

            let stats = compute_statistics(&s.rows);
            export_text(&render_summary_text(s, &stats), &path)?;
        }
        Ok(())
    }
}

fn per_session<T, F>(set: &SessionSet, f: F) -> Vec<Tagged<T>>
where
    T: ExportRow,
    F: Fn(&Session) -> Vec<T>,
{
    set.iter()
        .flat_map(|s| f(s).into_iter().map(|item| Tagged::new(&s.id, item)))
        .collect()
}

fn write<T: ExportRow>(format: ExportFormat, path: &Path, rows: Vec<Tagged<T>>) -> AppResult<()> {
    if rows.is_empty() {
        warning("No rows to export for the selected dataset.");
    }

    match format {
        ExportFormat::Csv => export_csv(&rows, path),
        ExportFormat::Json => export_json(&rows, path),
        ExportFormat::Txt => Err(AppError::InvalidExportFormat("txt".to_string())),
    }
}

fn default_summary_path(s: &Session) -> PathBuf {
    if let Some(p) = &s.summary_path {
        return p.clone();
    }
    match &s.csv_path {
        Some(csv) => csv.with_file_name(summary_name_for(csv)),
        None => PathBuf::from(format!("battery-summary_{}.txt", s.id)),
    }
}
