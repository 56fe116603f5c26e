use super::edit::run_edit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::prompt::Prompter;

pub fn handle(cmd: &Commands, cfg: &Config, prompter: &mut dyn Prompter) -> AppResult<()> {
    if let Commands::Progress { position, status } = cmd {
        run_edit(cfg, position, prompter, |s, p| s.set_progress(status, p))?;
    }
    Ok(())
}
