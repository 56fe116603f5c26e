use rtracker::errors::{AppError, SingleRowViolation};
use rtracker::models::dataset::{Dataset, LabeledRow, RowLabel};
use rtracker::models::record::{Record, RowSelector};

mod common;
use common::{dataset, row, schema, two_rows};

#[test]
fn test_materialize_by_label() {
    let ds = two_rows();
    let rec = Record::materialize(&ds, RowSelector::Label(RowLabel(1))).unwrap();

    assert_eq!(rec.label(), RowLabel(1));
    assert_eq!(rec.get("Position"), Some("2"));
    assert_eq!(rec.get("Notes"), Some("x"));
    assert_eq!(rec.headers(), schema().headers().as_slice());
    assert_eq!(rec.source().len(), 2);
}

#[test]
fn test_materialize_unknown_label_is_empty() {
    let ds = two_rows();
    let err = Record::materialize(&ds, RowSelector::Label(RowLabel(7))).unwrap_err();

    assert!(matches!(
        err,
        AppError::NotSingleRow(SingleRowViolation::Empty)
    ));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_materialize_by_key() {
    let ds = two_rows();
    let rec = Record::materialize(
        &ds,
        RowSelector::Key {
            column: "Position",
            value: " 1 ",
        },
    )
    .unwrap();

    assert_eq!(rec.label(), RowLabel(0));
    assert_eq!(rec.get("Progress"), Some("ToDo"));
}

#[test]
fn test_materialize_duplicate_key_is_multi_row() {
    let ds = dataset(vec![
        row("1", "ToDo", "Planned", ""),
        row("1", "WIP", "In Progress", ""),
        row("2", "Done", "Completed", ""),
    ]);

    let err = Record::materialize(
        &ds,
        RowSelector::Key {
            column: "Position",
            value: "1",
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::NotSingleRow(SingleRowViolation::MultiRow(2))
    ));
    assert!(err.to_string().contains("2 rows"));
}

#[test]
fn test_materialize_from_one_row_subset_keeps_label() {
    let ds = two_rows();
    let view = ds.filter_eq("Progress", "WIP");
    let rec = Record::materialize(&ds, RowSelector::Subset(&view)).unwrap();

    assert_eq!(rec.label(), RowLabel(1));
    assert_eq!(rec.get("Position"), Some("2"));
}

#[test]
fn test_materialize_whole_dataset_as_subset_fails() {
    let ds = two_rows();
    let err = Record::materialize(&ds, RowSelector::Subset(&ds)).unwrap_err();
    assert!(matches!(
        err,
        AppError::NotSingleRow(SingleRowViolation::MultiRow(2))
    ));

    let empty = Dataset::new(schema().headers());
    let err = Record::materialize(&ds, RowSelector::Subset(&empty)).unwrap_err();
    assert!(matches!(
        err,
        AppError::NotSingleRow(SingleRowViolation::Empty)
    ));
}

#[test]
fn test_duplicate_labels_are_rejected() {
    let rows = vec![
        LabeledRow {
            label: RowLabel(3),
            row: row("1", "ToDo", "Planned", ""),
        },
        LabeledRow {
            label: RowLabel(3),
            row: row("2", "ToDo", "Planned", ""),
        },
    ];

    let err = Dataset::with_labels(schema().headers(), rows).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}
