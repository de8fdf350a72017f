//! Turn files on disk into [`Session`]s.

pub mod csv_reader;
pub mod summary;

use crate::config::Config;
use crate::core::normalizer::normalize_rows;
use crate::errors::{AppError, AppResult};
use crate::models::session::{Session, SessionSummary};
use crate::models::session_set::SessionSet;
use crate::utils::path::{file_name, has_extension};
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static CSV_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^battery-debug_([^_]+)_(.+)\.csv$").expect("valid regex"));
static TXT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^battery-summary_([^_]+)_(.+)\.txt$").expect("valid regex"));

/// A debug CSV and its optional summary TXT, grouped by session id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub id: String,
    pub csv: Option<PathBuf>,
    pub txt: Option<PathBuf>,
}

/// Session id encoded in a file name, if it follows the naming scheme.
pub fn session_id_from_name(name: &str) -> Option<String> {
    CSV_NAME_RE
        .captures(name)
        .or_else(|| TXT_NAME_RE.captures(name))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Group CSV/TXT files by session id. Directories are expanded to the
/// files they contain. A CSV outside the naming scheme is kept under its
/// file stem; a TXT outside it is ignored.
pub fn pair_files(paths: &[PathBuf]) -> AppResult<Vec<FileGroup>> {
    let mut files = Vec::new();
    for p in paths {
        if p.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(p)?
                .filter_map(|e| e.ok().map(|e| e.path()))
                .filter(|p| p.is_file())
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(p.clone());
        }
    }

    // BTreeMap keeps the output order stable across runs.
    let mut groups: BTreeMap<String, FileGroup> = BTreeMap::new();

    for f in files {
        let name = file_name(&f);
        let id = if has_extension(&f, "csv") {
            session_id_from_name(&name).or_else(|| {
                f.file_stem().map(|s| s.to_string_lossy().to_string())
            })
        } else if has_extension(&f, "txt") {
            TXT_NAME_RE
                .captures(&name)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        } else {
            None
        };

        let Some(id) = id else {
            log::debug!("skipping {}", f.display());
            continue;
        };

        let group = groups.entry(id.clone()).or_insert_with(|| FileGroup {
            id,
            csv: None,
            txt: None,
        });
        if has_extension(&f, "csv") {
            group.csv = Some(f);
        } else {
            group.txt = Some(f);
        }
    }

    Ok(groups.into_values().collect())
}

/// Load one session. The summary TXT is optional.
pub fn load_session(group: &FileGroup, cfg: &Config) -> AppResult<Session> {
    let csv = group
        .csv
        .as_ref()
        .ok_or_else(|| AppError::SessionNotFound(group.id.clone()))?;

    let records = csv_reader::read_records(csv)?;
    let rows = normalize_rows(&records, &cfg.missing_marker);

    let summary = match &group.txt {
        Some(txt) => summary::parse_summary_text(&fs::read_to_string(txt)?),
        None => {
            log::warn!("no summary file for session {}", group.id);
            SessionSummary::default()
        }
    };

    Ok(Session::new(group.id.clone(), rows, summary).with_paths(Some(csv.clone()), group.txt.clone()))
}

/// Load every CSV-backed group among `paths` into a fresh set.
pub fn load_sessions(paths: &[PathBuf], cfg: &Config) -> AppResult<SessionSet> {
    let mut set = SessionSet::new();

    for group in pair_files(paths)? {
        if group.csv.is_none() {
            log::warn!("summary for session {} has no matching CSV", group.id);
            continue;
        }
        set.add(load_session(&group, cfg)?);
    }

    if set.is_empty() {
        return Err(AppError::NoSessions);
    }
    Ok(set)
}

/// Default name for a session's summary TXT, derived from its CSV name.
pub fn summary_name_for(csv: &Path) -> String {
    file_name(csv)
        .replace("battery-debug", "battery-summary")
        .replace(".csv", ".txt")
}
