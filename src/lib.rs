//! rTracker library root.
//! Exposes the CLI parser, the record-edit engine, the store backends and a
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::prompt::{AutoConfirm, Prompter, TerminalPrompter};

/// Confirmation provider selected by the global flags.
pub fn prompter_for(cli: &Cli) -> Box<dyn Prompter> {
    if cli.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(TerminalPrompter)
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut prompter = prompter_for(cli);
    let prompter = prompter.as_mut();

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Note { .. } => cli::commands::note::handle(&cli.command, cfg, prompter),
        Commands::Progress { .. } => cli::commands::progress::handle(&cli.command, cfg, prompter),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg, prompter),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, prompter),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(store) = &cli.store {
        cfg.store = utils::path::expand_tilde_string(store);
    }
    if let Some(backend) = cli.backend {
        cfg.backend = backend;
    }
    if let Some(mode) = cli.mode {
        cfg.write_mode = mode;
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once; it stays immutable after the overrides
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    apply_overrides(&cli, &mut cfg);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
