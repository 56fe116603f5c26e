//! ANSI color helper utilities for terminal output.

use crate::models::status::{DodState, ProgressState};
use regex::Regex;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

/// Remove ANSI escape sequences (for width computations).
pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey for empty cells, unchanged otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        paint("--", GREY)
    } else {
        value.to_string()
    }
}

/// Progress cell colored by status; unknown values are flagged red.
pub fn colorize_progress(value: &str) -> String {
    match ProgressState::parse(value) {
        Some(ProgressState::ToDo) => paint(value, BLUE),
        Some(ProgressState::Wip) => paint(value, YELLOW),
        Some(ProgressState::Done) => paint(value, GREEN),
        Some(ProgressState::Missed) => paint(value, MAGENTA),
        None if value.trim().is_empty() => colorize_optional(value),
        None => paint(value, RED),
    }
}

pub fn colorize_dod(value: &str) -> String {
    match DodState::parse(value) {
        Some(DodState::Completed) => paint(value, GREEN),
        Some(DodState::Unfinished) => paint(value, MAGENTA),
        Some(DodState::InProgress) => paint(value, YELLOW),
        Some(DodState::Planned) => paint(value, BLUE),
        None => colorize_optional(value),
    }
}
