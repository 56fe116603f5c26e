//! Shared flow of the editing commands: load, edit, review, commit.

use crate::config::Config;
use crate::core::commit::{CommitOutcome, CommitProtocol};
use crate::core::editor::{AbortReason, EditOutcome, EditSession};
use crate::errors::AppResult;
use crate::models::record::{Record, RowSelector};
use crate::store;
use crate::ui::messages::{cancelled, header, info, success};
use crate::ui::prompt::Prompter;
use crate::ui::render::render_diff;

fn describe_abort(reason: AbortReason) -> &'static str {
    match reason {
        AbortReason::AppendDeclined => "Append declined, notes left unchanged.",
        AbortReason::UpdateCancelled => "Update cancelled, notes left unchanged.",
        AbortReason::DeleteDeclined => "Delete declined, notes left unchanged.",
    }
}

/// Run `edit` on the row whose primary key is `position`, then offer the
/// commit gate.
pub fn run_edit<F>(
    cfg: &Config,
    position: &str,
    prompter: &mut dyn Prompter,
    edit: F,
) -> AppResult<()>
where
    F: FnOnce(&mut EditSession<'_>, &mut dyn Prompter) -> AppResult<EditOutcome>,
{
    let mut remote = store::open(cfg)?;
    let dataset = remote.fetch_all()?;

    let record = Record::materialize(
        &dataset,
        RowSelector::Key {
            column: cfg.columns.primary_key(),
            value: position,
        },
    )?;

    let mut session = EditSession::new(record, &cfg.columns);

    match edit(&mut session, &mut *prompter)? {
        EditOutcome::Staged => {}
        EditOutcome::Unchanged(msg) => {
            info(msg);
            return Ok(());
        }
        EditOutcome::Aborted(reason) => {
            cancelled(describe_abort(reason));
            return Ok(());
        }
    }

    if let Some(after) = session.after() {
        header(format!(
            "{} {} ({})",
            cfg.columns.primary_key(),
            position,
            session.last_command()
        ));
        print!(
            "{}",
            render_diff(session.before(), after, session.record().headers())
        );
    }

    let mut protocol = CommitProtocol::new(remote.as_mut(), cfg.write_mode);
    match protocol.commit(&session, prompter)? {
        CommitOutcome::NothingToCommit => info("Nothing to save."),
        CommitOutcome::Aborted => cancelled("Changes discarded, remote store untouched."),
        CommitOutcome::Overwritten { rows } => {
            success(format!("Remote store overwritten ({} rows).", rows))
        }
        CommitOutcome::Injected(Some(row_number)) => {
            success(format!("Row {} updated in the remote store.", row_number))
        }
        CommitOutcome::Injected(None) => {}
    }

    Ok(())
}
