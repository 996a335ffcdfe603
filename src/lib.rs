//! worktime library root.
//! Exposes the CLI parser, the high-level run() function and the
//! ledger/reconciliation modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Init) => cli::commands::init::handle(cli, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::Service { .. }) => cli::commands::service::handle(cmd, cfg),
        Some(cmd @ Commands::Holidays { .. }) => cli::commands::holidays::handle(cmd),
        Some(cmd @ Commands::Report { .. }) => cli::commands::report::handle(Some(cmd), cfg),
        None => cli::commands::report::handle(None, cfg),
    }
}

/// Apply the global command-line overrides on top of the loaded config.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(file) = &cli.file {
        cfg.ledger_file = file.clone();
    }
    if let Some(export) = &cli.export {
        cfg.export_file = export.clone();
    }
    if cli.minutes {
        cfg.show_minutes = true;
    }
    if let Some(vacation) = cli.vacation {
        cfg.vacation_per_month = vacation;
    }
    if let Some(cutoff) = &cli.cutoff {
        cfg.cutoff_date = Some(cutoff.clone());
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut cfg = Config::load()?;
    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg)
}
