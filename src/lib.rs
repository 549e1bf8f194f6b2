//! gerenciador library root.
//! Exposes the CLI parser, the high-level run() function, and the CSV-backed
//! record store.

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
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
        Commands::List => cli::commands::list::handle(cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command, cfg),
        Commands::Types => cli::commands::types::handle(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed to every handler
    let mut cfg = Config::load()?;

    if let Some(custom_file) = &cli.file {
        cfg.data_file = custom_file.clone();
    }

    dispatch(&cli, &cfg)
}
