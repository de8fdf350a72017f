use crate::export::{Dataset, ExportFormat};
use crate::models::device::Device;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface definition for rBattlog
/// CLI application to analyze WAD / Light Source battery debug logs
#[derive(Parser)]
#[command(
    name = "rbattlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze WAD and Light Source battery debug logs: statistics, estimate accuracy, diagnostics and session comparison",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging (RUST_LOG still wins)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which debug-interface analysis to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticKind {
    Temperature,
    Current,
    Voltage,
    Power,
    Correlation,
    Capacity,
    Health,
    Heatmap,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Per-device battery statistics for each session
    Stats {
        /// battery-debug CSV / battery-summary TXT files, or directories
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Duration-estimate accuracy against the actual remaining time
    Accuracy {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(long, value_enum, default_value = "wad")]
        device: Device,

        #[arg(long = "all", help = "Print every row instead of one per minute")]
        all_rows: bool,
    },

    /// WAD debug-interface analyses (temperature, current, voltage, ...)
    Diagnostics {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(long, value_enum)]
        kind: DiagnosticKind,

        #[arg(long, help = "Bins per heatmap axis (overrides config)")]
        bins: Option<usize>,
    },

    /// Compare two or more sessions on a 0-99% progress axis
    Compare {
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        #[arg(long = "curves", help = "Also print the resampled battery curves")]
        curves: bool,
    },

    /// Export derived data or the summary TXT
    Export {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_enum, default_value = "stats")]
        dataset: Dataset,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, value_enum, help = "Restrict stats/accuracy to one device")]
        device: Option<Device>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
