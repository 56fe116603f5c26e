use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - the store, with the configured column headers
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rTracker…");

    //
    // 1️⃣ CONFIGURATION
    //
    if !cli.test {
        cfg.save()?;
        println!("📄 Config file : {}", Config::config_file().display());
    }

    //
    // 2️⃣ STORE (created on open when missing)
    //
    if let Some(parent) = Path::new(&cfg.store).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut remote = store::open(cfg)?;
    println!("🗄️  Store       : {} ({:?})", &cfg.store, cfg.backend);

    //
    // 3️⃣ AUDIT (non-blocking)
    //
    if let Err(e) = remote.record_audit("init", "store", &format!("Store initialized at {}", &cfg.store)) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 rTracker initialization completed!");
    Ok(())
}
