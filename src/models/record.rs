use super::dataset::{Dataset, LabeledRow, Row, RowLabel};
use crate::errors::{AppError, AppResult, SingleRowViolation};

/// How a caller picks the row to materialize.
#[derive(Debug, Clone, Copy)]
pub enum RowSelector<'a> {
    /// A stable row label of the source dataset.
    Label(RowLabel),
    /// A filtered view that must hold exactly one row.
    Subset(&'a Dataset),
    /// A primary-key value, matched against `column`.
    Key { column: &'a str, value: &'a str },
}

/// Single-row view over a dataset snapshot.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    before: Row,
    label: RowLabel,
    headers: Vec<String>,
    source: &'a Dataset,
}

impl<'a> Record<'a> {
    /// Resolve `selector` against `source`.
    /// Fails with `NotSingleRow` unless exactly one row resolves.
    pub fn materialize(source: &'a Dataset, selector: RowSelector<'_>) -> AppResult<Self> {
        let keyed;
        let (headers, matches): (&[String], Vec<&LabeledRow>) = match selector {
            RowSelector::Label(label) => (
                source.headers(),
                source.rows().iter().filter(|r| r.label == label).collect(),
            ),
            RowSelector::Subset(view) => (view.headers(), view.rows().iter().collect()),
            RowSelector::Key { column, value } => {
                keyed = source.filter_eq(column, value);
                (keyed.headers(), keyed.rows().iter().collect())
            }
        };

        match matches.as_slice() {
            [] => Err(AppError::NotSingleRow(SingleRowViolation::Empty)),
            [only] => Ok(Self {
                before: only.row.clone(),
                label: only.label,
                headers: headers.to_vec(),
                source,
            }),
            many => Err(AppError::NotSingleRow(SingleRowViolation::MultiRow(
                many.len(),
            ))),
        }
    }

    pub fn row(&self) -> &Row {
        &self.before
    }

    pub fn label(&self) -> RowLabel {
        self.label
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn source(&self) -> &'a Dataset {
        self.source
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.before.get(column)
    }
}
