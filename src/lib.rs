//! runsheet library root.
//! Exposes the schedule engine (store, conflicts, assembler, projector)
//! plus the CLI parser and high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod persist;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Day { action } => cli::commands::day::handle(action, cfg),
        Commands::Event { action } => cli::commands::event::handle(action, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Template { .. } => cli::commands::template::handle(&cli.command, cfg),
        Commands::Vendor { action } => cli::commands::vendor::handle(action, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; `--file` overrides the data file for this call.
    let mut cfg = Config::load()?;
    if let Some(custom) = &cli.file {
        cfg.data_file = custom.clone();
    }

    dispatch(&cli, &cfg)
}
