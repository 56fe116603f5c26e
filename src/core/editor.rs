//! Edit session over a single record.
//!
//! A session starts from a [`Record`], stages a modified copy of its row and
//! the matching full-dataset candidate, and leaves persistence to
//! [`crate::core::commit::CommitProtocol`].

use crate::core::reconcile;
use crate::errors::{AppError, AppResult};
use crate::models::dataset::{Dataset, Row, RowLabel};
use crate::models::record::Record;
use crate::models::schema::{ColumnSchema, Field};
use crate::models::status::{DodState, ProgressState, next_dod};
use crate::ui::prompt::Prompter;
use chrono::{Local, NaiveDateTime};

/// Leading placeholder stripped from notes under `nodestroy`.
pub const NOTE_PLACEHOLDER: &str = "Add a note";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteMode {
    Insert,
    Append,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Idle,
    Note(NoteMode),
    Progress(ProgressMode),
}

/// Why an edit stopped without staging anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    AppendDeclined,
    UpdateCancelled,
    DeleteDeclined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new row and dataset candidate are staged.
    Staged,
    /// Nothing to do; the field is left as it was.
    Unchanged(String),
    /// The user declined a gate.
    Aborted(AbortReason),
}

pub struct EditSession<'a> {
    record: Record<'a>,
    schema: &'a ColumnSchema,
    before: Row,
    after: Option<Row>,
    staged: Option<Dataset>,
    edit_mode: EditMode,
    is_modified: bool,
    last_modified: Option<NaiveDateTime>,
    last_command: String,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Truthy check on a cell: present and not the empty string.
pub fn has_content(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// `<old>\n\nNew Note: <stamp>\n<new>\n`
pub fn append_note(old: &str, new: &str, stamp: &str) -> String {
    format!("{}\n\nNew Note: {}\n{}\n", old, stamp, new)
}

/// Notes left after a clear.
pub fn clear_note(old: &str, nodestroy: bool) -> String {
    if nodestroy {
        old.strip_prefix(NOTE_PLACEHOLDER)
            .unwrap_or(old)
            .trim_start()
            .to_string()
    } else {
        String::new()
    }
}

impl<'a> EditSession<'a> {
    pub fn new(record: Record<'a>, schema: &'a ColumnSchema) -> Self {
        let before = record.row().clone();
        Self {
            record,
            schema,
            before,
            after: None,
            staged: None,
            edit_mode: EditMode::Idle,
            is_modified: false,
            last_modified: None,
            last_command: String::new(),
            clock: local_now,
        }
    }

    /// Replace the wall clock used for note stamps and `last_modified`.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn record(&self) -> &Record<'a> {
        &self.record
    }

    pub fn label(&self) -> RowLabel {
        self.record.label()
    }

    pub fn before(&self) -> &Row {
        &self.before
    }

    pub fn after(&self) -> Option<&Row> {
        self.after.as_ref()
    }

    /// Full dataset with the staged values written in.
    pub fn staged_dataset(&self) -> Option<&Dataset> {
        self.staged.as_ref()
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn last_modified(&self) -> Option<NaiveDateTime> {
        self.last_modified
    }

    pub fn last_command(&self) -> &str {
        &self.last_command
    }

    pub fn schema(&self) -> &ColumnSchema {
        self.schema
    }

    fn col(&self, field: Field) -> &'a str {
        self.schema.column(field)
    }

    fn stamp(&self) -> String {
        (self.clock)().format(TIMESTAMP_FORMAT).to_string()
    }

    fn abort(&mut self, reason: AbortReason) -> EditOutcome {
        self.after = None;
        self.staged = None;
        self.is_modified = false;
        EditOutcome::Aborted(reason)
    }

    /// Record staged writes: every `(column, value)` pair lands in `after`
    /// and is chained through `reconcile::insert`.
    fn stage(&mut self, writes: &[(&str, String)]) -> AppResult<EditOutcome> {
        let mut after = self.before.clone();
        let mut dataset: Option<Dataset> = None;

        for (column, value) in writes {
            after.set(column, Some(value.clone()));
            dataset = Some(reconcile::insert(
                &self.record,
                value,
                column,
                None,
                dataset.as_ref(),
            )?);
        }

        self.after = Some(after);
        self.staged = dataset;
        self.is_modified = true;
        self.last_modified = Some((self.clock)());
        Ok(EditOutcome::Staged)
    }

    // ---------------------------
    // Notes
    // ---------------------------

    /// Add a note: overwrite an empty field, append to a filled one after
    /// confirmation.
    pub fn add_note(&mut self, text: &str, prompter: &mut dyn Prompter) -> AppResult<EditOutcome> {
        self.last_command = "note add".to_string();
        let notes_col = self.col(Field::Notes);
        let current = self.before.get(notes_col).map(str::to_string);

        let mode = if has_content(current.as_deref()) {
            if !prompter.confirm("Notes already has content. Append the new note?") {
                return Ok(self.abort(AbortReason::AppendDeclined));
            }
            NoteMode::Append
        } else {
            NoteMode::Insert
        };
        self.edit_mode = EditMode::Note(mode);

        let value = match mode {
            NoteMode::Append => append_note(current.as_deref().unwrap_or(""), text, &self.stamp()),
            _ => text.to_string(),
        };
        self.stage(&[(notes_col, value)])
    }

    /// Append to existing notes, optionally revising the text first.
    pub fn update_note(
        &mut self,
        text: &str,
        prompter: &mut dyn Prompter,
    ) -> AppResult<EditOutcome> {
        self.last_command = "note update".to_string();
        let notes_col = self.col(Field::Notes);
        let current = match self.before.get(notes_col) {
            Some(v) if has_content(Some(v)) => v.to_string(),
            _ => {
                return Ok(EditOutcome::Unchanged(
                    "Notes is empty, nothing to update. Use 'add' instead.".to_string(),
                ));
            }
        };

        let question = format!("Append \"{}\" to the existing notes?", text);
        let new_text = if prompter.confirm(&question) {
            text.to_string()
        } else {
            match prompter.text("Revised note (empty to cancel)") {
                Some(t) => t,
                None => return Ok(self.abort(AbortReason::UpdateCancelled)),
            }
        };

        self.edit_mode = EditMode::Note(NoteMode::Append);
        let value = append_note(&current, &new_text, &self.stamp());
        self.stage(&[(notes_col, value)])
    }

    /// Clear the notes field. An empty field is left untouched.
    pub fn delete_note(
        &mut self,
        nodestroy: bool,
        prompter: &mut dyn Prompter,
    ) -> AppResult<EditOutcome> {
        self.last_command = "note delete".to_string();
        let notes_col = self.col(Field::Notes);
        let current = match self.before.get(notes_col) {
            Some(v) if has_content(Some(v)) => v.to_string(),
            _ => {
                return Ok(EditOutcome::Unchanged(
                    "Notes is already empty.".to_string(),
                ));
            }
        };

        if !prompter.confirm("Delete the notes of this row?") {
            return Ok(self.abort(AbortReason::DeleteDeclined));
        }

        self.edit_mode = EditMode::Note(NoteMode::Clear);
        let value = clear_note(&current, nodestroy);
        self.stage(&[(notes_col, value)])
    }

    // ---------------------------
    // Progress / DoD
    // ---------------------------

    /// Select a new progress status and derive the DoD from it.
    pub fn set_progress(
        &mut self,
        requested: &str,
        prompter: &mut dyn Prompter,
    ) -> AppResult<EditOutcome> {
        self.last_command = "progress".to_string();
        let progress_col = self.col(Field::Progress);
        let dod_col = self.col(Field::DoD);

        let wanted = match ProgressState::parse(requested) {
            Some(p) => p,
            None => {
                let labels = ProgressState::labels();
                let picked = prompter.choose(
                    &format!("'{}' is not a valid status. Select one:", requested),
                    &labels,
                );
                match picked {
                    Some(i) => ProgressState::ALL[i],
                    None => {
                        return Err(AppError::Validation(format!(
                            "no valid status selected (expected one of {})",
                            labels.join(", ")
                        )));
                    }
                }
            }
        };

        let stored = self.before.get(progress_col).unwrap_or("");
        let current = ProgressState::parse(stored).ok_or_else(|| {
            AppError::InvalidState(format!(
                "stored {} value '{}' is not one of {}",
                progress_col,
                stored,
                ProgressState::labels().join(", ")
            ))
        })?;

        self.edit_mode = EditMode::Progress(ProgressMode::Select);

        if wanted == current {
            return Ok(EditOutcome::Unchanged(format!(
                "{} is already {}.",
                progress_col,
                current.label()
            )));
        }

        let current_dod = self.before.get(dod_col).and_then(DodState::parse);
        let dod = next_dod(current_dod, wanted);

        let mut writes = vec![(progress_col, wanted.to_stored())];
        if current_dod != Some(dod) {
            writes.push((dod_col, dod.label().to_string()));
        }
        self.stage(&writes)
    }
}
