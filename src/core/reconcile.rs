//! Pure write/merge helpers over dataset copies.
//!
//! Nothing here mutates its inputs: every function clones the dataset it
//! works on and returns the new copy.

use crate::errors::{AppError, AppResult, SingleRowViolation};
use crate::models::dataset::{Dataset, Row, RowLabel};
use crate::models::record::Record;

/// Row a write should land on.
///
/// An explicit `index` one off the record's label is a 1-based position
/// coming from the UI; the record's own label wins in that case.
pub fn target_label(record: &Record<'_>, index: Option<usize>) -> RowLabel {
    let label = record.label();
    match index {
        Some(i) if i.abs_diff(label.index()) == 1 => label,
        Some(i) => RowLabel(i),
        None => label,
    }
}

/// Write `value` into `column` of the record's row.
///
/// Starts from `prior` when given so several columns can be chained on one
/// working copy, otherwise from the record's source dataset.
pub fn insert(
    record: &Record<'_>,
    value: &str,
    column: &str,
    index: Option<usize>,
    prior: Option<&Dataset>,
) -> AppResult<Dataset> {
    let mut working = prior.unwrap_or_else(|| record.source()).clone();

    if !working.headers().iter().any(|h| h == column) {
        return Err(AppError::Validation(format!(
            "unknown column '{}'",
            column
        )));
    }

    let label = target_label(record, index);
    let row = working
        .get_mut(label)
        .ok_or_else(|| AppError::NotFound(format!("row label {} not in dataset", label)))?;
    row.set(column, Some(value.to_string()));

    Ok(working)
}

/// Merge one edited row into `full` before `index`.
///
/// The row that was at `index` is pushed down, not replaced, so the result
/// always holds `full.len() + 1` rows. Labels are re-assigned from zero and
/// blank cells of the edited row are dropped to absent.
pub fn integrate(single: &Dataset, full: &Dataset, index: usize) -> AppResult<Dataset> {
    let edited = match single.rows() {
        [only] => only.row.without_blanks(),
        [] => return Err(AppError::NotSingleRow(SingleRowViolation::Empty)),
        many => {
            return Err(AppError::NotSingleRow(SingleRowViolation::MultiRow(
                many.len(),
            )));
        }
    };

    if index > full.len() {
        return Err(AppError::Validation(format!(
            "merge index {} is past the end of a {}-row dataset",
            index,
            full.len()
        )));
    }

    let mut rows: Vec<Row> = Vec::with_capacity(full.len() + 1);
    rows.extend(full.plain_rows().take(index).cloned());
    rows.push(edited);
    rows.extend(full.plain_rows().skip(index).cloned());

    Ok(Dataset::from_rows(full.headers().to_vec(), rows))
}
