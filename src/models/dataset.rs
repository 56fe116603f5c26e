//! In-memory tabular dataset: ordered rows keyed by a stable row label.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Stable internal identifier of a dataset row.
///
/// Assigned at load time (0-based) and independent of the user-facing
/// `Position` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RowLabel(pub usize);

impl RowLabel {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered (column → value) cells of one row.
/// `None` marks an absent value; it renders as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Row {
    cells: Vec<(String, Option<String>)>,
}

impl Row {
    /// Build a row from headers and text values; missing trailing values
    /// are treated as absent.
    pub fn from_values<S: AsRef<str>>(headers: &[String], values: &[S]) -> Self {
        let cells = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), values.get(i).map(|v| v.as_ref().to_string())))
            .collect();
        Self { cells }
    }

    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: Vec<(K, V)>) -> Self {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Set a cell, appending the column when the row does not carry it yet.
    pub fn set(&mut self, column: &str, value: Option<String>) {
        match self.cells.iter_mut().find(|(c, _)| c == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column.to_string(), value)),
        }
    }

    pub fn headers(&self) -> Vec<String> {
        self.cells.iter().map(|(c, _)| c.clone()).collect()
    }

    pub fn cells(&self) -> &[(String, Option<String>)] {
        &self.cells
    }

    /// Values as text, ordered by `headers`.
    pub fn values_for(&self, headers: &[String]) -> Vec<String> {
        headers
            .iter()
            .map(|h| self.get(h).unwrap_or("").to_string())
            .collect()
    }

    /// Copy of this row where empty values are dropped to absent.
    pub fn without_blanks(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|(c, v)| {
                let kept = v.as_ref().filter(|s| !s.trim().is_empty()).cloned();
                (c.clone(), kept)
            })
            .collect();
        Self { cells }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledRow {
    pub label: RowLabel,
    pub row: Row,
}

/// Ordered sequence of rows sharing one header list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<LabeledRow>,
}

impl Dataset {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Build a dataset assigning labels 0..n in row order.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Row>) -> Self {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| LabeledRow {
                label: RowLabel(i),
                row,
            })
            .collect();
        Self { headers, rows }
    }

    /// Build a dataset keeping explicit labels; duplicate labels are rejected.
    pub fn with_labels(headers: Vec<String>, rows: Vec<LabeledRow>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for r in &rows {
            if !seen.insert(r.label) {
                return Err(AppError::Validation(format!(
                    "duplicate row label {} in dataset",
                    r.label
                )));
            }
        }
        Ok(Self { headers, rows })
    }

    /// One-row dataset keeping the row's original label.
    pub fn single(headers: Vec<String>, label: RowLabel, row: Row) -> Self {
        Self {
            headers,
            rows: vec![LabeledRow { label, row }],
        }
    }

    /// Build a dataset from raw text records (e.g. a store fetch).
    pub fn from_records(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let rows = records
            .iter()
            .map(|values| Row::from_values(&headers, values))
            .collect();
        Self::from_rows(headers, rows)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[LabeledRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, label: RowLabel) -> Option<&Row> {
        self.rows.iter().find(|r| r.label == label).map(|r| &r.row)
    }

    pub fn get_mut(&mut self, label: RowLabel) -> Option<&mut Row> {
        self.rows
            .iter_mut()
            .find(|r| r.label == label)
            .map(|r| &mut r.row)
    }

    /// Row at display order `idx` (not a label lookup).
    pub fn nth(&self, idx: usize) -> Option<&LabeledRow> {
        self.rows.get(idx)
    }

    /// Subset of rows matching `pred`; labels are preserved.
    pub fn filter<F>(&self, pred: F) -> Dataset
    where
        F: Fn(&Row) -> bool,
    {
        Dataset {
            headers: self.headers.clone(),
            rows: self.rows.iter().filter(|r| pred(&r.row)).cloned().collect(),
        }
    }

    /// Rows whose `column` equals `value` (trimmed comparison).
    pub fn filter_eq(&self, column: &str, value: &str) -> Dataset {
        let wanted = value.trim();
        self.filter(|r| r.get(column).map(str::trim) == Some(wanted))
    }

    /// All cells cast to text, ordered by headers.
    pub fn to_records(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.row.values_for(&self.headers))
            .collect()
    }

    pub(crate) fn plain_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().map(|r| &r.row)
    }
}
