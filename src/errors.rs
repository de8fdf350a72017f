//! Unified application error type.
//! Ingestion, configuration, export and the CLI layer all return AppError.
//! The analyzers in `core` are infallible except where a timestamp must be parsed.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("No valid battery-debug CSV files found")]
    NoSessions,

    #[error("Comparison needs at least 2 sessions, got {0}")]
    NotEnoughSessions(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
