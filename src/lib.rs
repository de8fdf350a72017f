//! rBattlog library root.
//! Exposes the CLI parser, the high-level run() function and the analysis modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Accuracy { .. } => cli::commands::accuracy::handle(&cli.command, cfg),
        Commands::Diagnostics { .. } => cli::commands::diagnostics::handle(&cli.command, cfg),
        Commands::Compare { .. } => cli::commands::compare::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Logging: config level by default, `--verbose` for debug, `RUST_LOG` wins.
fn init_logging(cli: &Cli, cfg: &Config) {
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        cfg.level_filter()
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (the override path comes from the command line)
    let config_path = cli.config.as_deref().map(expand_tilde);
    let cfg = match Config::load(config_path.as_deref()) {
        Ok(cfg) => cfg,
        // a broken file must not prevent `init --force` from replacing it
        Err(_) if matches!(cli.command, Commands::Init { .. }) => Config::default(),
        Err(e) => return Err(e),
    };

    // 3️⃣ logging
    init_logging(&cli, &cfg);
    log::debug!("rbattlog {} starting", env!("CARGO_PKG_VERSION"));

    // 4️⃣ dispatch
    dispatch(&cli, &cfg)
}
