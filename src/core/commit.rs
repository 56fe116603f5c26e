//! Write-back of a staged edit to the remote store.

use crate::core::editor::EditSession;
use crate::core::reconcile::integrate;
use crate::errors::AppResult;
use crate::models::dataset::{Dataset, Row};
use crate::store::RemoteStore;
use crate::ui::prompt::Prompter;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a merged edit reaches the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Replace the remote table with the whole merged dataset.
    Bulk,
    /// Write only the edited row onto the remote row with the same primary key.
    #[default]
    Inject,
}

impl WriteMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteMode::Bulk => "bulk",
            WriteMode::Inject => "inject",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The session has nothing staged.
    NothingToCommit,
    /// The user declined the save gate; the remote is untouched.
    Aborted,
    /// The merged dataset replaced the remote table.
    Overwritten { rows: usize },
    /// The edited row was written to this 1-based remote row number, or
    /// nothing was written because no remote row carried its key.
    Injected(Option<usize>),
}

pub struct CommitProtocol<'s> {
    store: &'s mut dyn RemoteStore,
    mode: WriteMode,
}

/// First remote row whose `key_column` equals `key`, as a 1-based row number.
pub fn find_row_number(remote: &Dataset, key_column: &str, key: &str) -> Option<usize> {
    let wanted = key.trim();
    remote
        .rows()
        .iter()
        .position(|r| r.row.get(key_column).map(str::trim) == Some(wanted))
        .map(|i| i + 1)
}

impl<'s> CommitProtocol<'s> {
    pub fn new(store: &'s mut dyn RemoteStore, mode: WriteMode) -> Self {
        Self { store, mode }
    }

    /// Confirm, re-fetch, merge and write the session's staged row.
    pub fn commit(
        &mut self,
        session: &EditSession<'_>,
        prompter: &mut dyn Prompter,
    ) -> AppResult<CommitOutcome> {
        let after = match session.after() {
            Some(row) if session.is_modified() => row,
            _ => return Ok(CommitOutcome::NothingToCommit),
        };

        if !prompter.confirm("Save changes to the remote store?") {
            return Ok(CommitOutcome::Aborted);
        }

        let fresh = self.store.fetch_all()?;
        let label = session.label();
        let single = Dataset::single(fresh.headers().to_vec(), label, after.clone());
        let merged = integrate(&single, &fresh, label.index().min(fresh.len()))?;

        let key_column = session.schema().primary_key();
        let key = after.get(key_column).unwrap_or("").to_string();

        let outcome = match self.mode {
            WriteMode::Bulk => {
                self.store.overwrite(&merged)?;
                CommitOutcome::Overwritten { rows: merged.len() }
            }
            WriteMode::Inject => match find_row_number(&fresh, key_column, &key) {
                Some(row_number) => {
                    self.store
                        .write_row(row_number, &ordered_values(after, fresh.headers()))?;
                    CommitOutcome::Injected(Some(row_number))
                }
                None => CommitOutcome::Injected(None),
            },
        };

        if outcome != CommitOutcome::Injected(None) {
            self.store.record_audit(
                session.last_command(),
                &format!("{}={}", key_column, key),
                &format!("{} write of row label {}", self.mode.as_str(), label),
            )?;
        }

        Ok(outcome)
    }
}

/// Row values in remote column order; columns the row lacks are blank.
fn ordered_values(row: &Row, headers: &[String]) -> Vec<String> {
    if headers.is_empty() {
        return row
            .cells()
            .iter()
            .map(|(_, v)| v.clone().unwrap_or_default())
            .collect();
    }
    row.values_for(headers)
}
