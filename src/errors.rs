//! Unified application error type.
//! All modules (models, core, store, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

/// Which half of the single-row constraint a selection violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleRowViolation {
    /// The selection resolved to no row at all.
    Empty,
    /// The selection resolved to more than one row.
    MultiRow(usize),
}

impl fmt::Display for SingleRowViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SingleRowViolation::Empty => write!(f, "selection is empty, expected exactly one row"),
            SingleRowViolation::MultiRow(n) => {
                write!(f, "selection has {} rows, expected exactly one row", n)
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store backends
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Record / edit engine
    // ---------------------------
    #[error("Not a single row: {0}")]
    NotSingleRow(SingleRowViolation),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid stored state: {0}")]
    InvalidState(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
