use crate::core::calculator::comparison::COMPARISON_POINTS;
use crate::core::calculator::diagnostics::HEATMAP_BINS;
use crate::errors::{AppError, AppResult};
use crate::utils::date::default_formats;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Token the debug interface writes when a diagnostic value is missing
    #[serde(default = "default_missing_marker")]
    pub missing_marker: String,
    #[serde(default = "default_comparison_points")]
    pub comparison_points: usize,
    #[serde(default = "default_heatmap_bins")]
    pub heatmap_bins: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_formats")]
    pub date_formats: Vec<String>,
}

fn default_missing_marker() -> String {
    "--".to_string()
}
fn default_comparison_points() -> usize {
    COMPARISON_POINTS
}
fn default_heatmap_bins() -> usize {
    HEATMAP_BINS
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            missing_marker: default_missing_marker(),
            comparison_points: default_comparison_points(),
            heatmap_bins: default_heatmap_bins(),
            log_level: default_log_level(),
            date_formats: default_formats(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rbattlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbattlog.conf")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file yields the defaults; a broken one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Write the default configuration, creating the directory when needed.
    /// An existing file is only replaced with `force`.
    pub fn init(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }

    /// Validate the values; returns one message per problem found.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.missing_marker.is_empty() {
            problems.push("missing_marker must not be empty".to_string());
        }
        if self.comparison_points == 0 {
            problems.push("comparison_points must be at least 1".to_string());
        }
        if self.heatmap_bins == 0 {
            problems.push("heatmap_bins must be at least 1".to_string());
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            problems.push(format!(
                "log_level '{}' is not one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }
        if self.date_formats.is_empty() {
            problems.push("date_formats must list at least one format".to_string());
        }

        problems
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Warn)
    }
}
