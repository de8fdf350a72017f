pub mod accuracy;
pub mod compare;
pub mod config;
pub mod diagnostics;
pub mod export;
pub mod init;
pub mod stats;

use crate::config::Config;
use crate::errors::AppResult;
use crate::ingest::load_sessions;
use crate::models::session_set::SessionSet;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Load the sessions named on the command line.
pub(crate) fn load(files: &[PathBuf], cfg: &Config) -> AppResult<SessionSet> {
    let paths: Vec<PathBuf> = files
        .iter()
        .map(|p| expand_tilde(&p.to_string_lossy()))
        .collect();
    load_sessions(&paths, cfg)
}
