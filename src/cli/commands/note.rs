use super::edit::run_edit;
use crate::cli::parser::{Commands, NoteAction};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::prompt::Prompter;

pub fn handle(cmd: &Commands, cfg: &Config, prompter: &mut dyn Prompter) -> AppResult<()> {
    if let Commands::Note { position, action } = cmd {
        match action {
            NoteAction::Add { text } => {
                run_edit(cfg, position, prompter, |s, p| s.add_note(text, p))?
            }
            NoteAction::Update { text } => {
                run_edit(cfg, position, prompter, |s, p| s.update_note(text, p))?
            }
            NoteAction::Delete { nodestroy } => run_edit(cfg, position, prompter, |s, p| {
                s.delete_note(*nodestroy || cfg.nodestroy, p)
            })?,
        }
    }
    Ok(())
}
