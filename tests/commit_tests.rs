use rtracker::core::commit::{CommitOutcome, CommitProtocol, WriteMode, find_row_number};
use rtracker::core::editor::EditSession;
use rtracker::errors::AppError;
use rtracker::models::dataset::RowLabel;
use rtracker::models::record::{Record, RowSelector};
use rtracker::store::RemoteStore;
use rtracker::store::memory::MemoryStore;
use rtracker::ui::prompt::ScriptedPrompter;

mod common;
use common::{dataset, row, schema, two_rows};

#[test]
fn test_inject_writes_matching_position_only() {
    let ds = two_rows();
    let cols = schema();
    let mut store = MemoryStore::new(&ds);

    let rec = Record::materialize(&ds, RowSelector::Label(RowLabel(0))).unwrap();
    let mut session = EditSession::new(rec, &cols);
    let mut edit_prompts = ScriptedPrompter::new(Vec::<String>::new());
    session.set_progress("Done", &mut edit_prompts).unwrap();

    let mut prompter = ScriptedPrompter::new(vec!["y"]);
    let outcome = CommitProtocol::new(&mut store, WriteMode::Inject)
        .commit(&session, &mut prompter)
        .unwrap();

    assert_eq!(outcome, CommitOutcome::Injected(Some(1)));
    assert_eq!(store.rows().len(), 2);
    assert_eq!(store.rows()[0][9], "DONE");
    assert_eq!(store.rows()[0][3], "Completed");
    assert_eq!(store.rows()[1][9], "WIP");
    assert_eq!(store.audit.len(), 1);
    assert_eq!(store.audit[0].0, "progress");
}

#[test]
fn test_inject_matches_fresh_remote_not_stale_snapshot() {
    let ds = two_rows();
    let cols = schema();

    // the remote gained a row at the top since the snapshot was taken
    let remote = dataset(vec![
        row("0", "ToDo", "Planned", ""),
        row("1", "ToDo", "Planned", ""),
        row("2", "WIP", "In Progress", "x"),
    ]);
    let mut store = MemoryStore::new(&remote);

    let rec = Record::materialize(&ds, RowSelector::Label(RowLabel(1))).unwrap();
    let mut session = EditSession::new(rec, &cols);
    session
        .set_progress("Done", &mut ScriptedPrompter::new(Vec::<String>::new()))
        .unwrap();

    let outcome = CommitProtocol::new(&mut store, WriteMode::Inject)
        .commit(&session, &mut ScriptedPrompter::new(vec!["y"]))
        .unwrap();

    assert_eq!(outcome, CommitOutcome::Injected(Some(3)));
    assert_eq!(store.rows()[2][0], "2");
    assert_eq!(store.rows()[2][9], "DONE");
    assert_eq!(store.rows()[1][9], "ToDo");
}

#[test]
fn test_inject_without_match_is_silent_noop() {
    let ds = two_rows();
    let cols = schema();
    let mut store = MemoryStore::new(&dataset(vec![row("7", "ToDo", "Planned", "")]));

    let rec = Record::materialize(&ds, RowSelector::Label(RowLabel(0))).unwrap();
    let mut session = EditSession::new(rec, &cols);
    session
        .add_note("hello", &mut ScriptedPrompter::new(Vec::<String>::new()))
        .unwrap();

    let outcome = CommitProtocol::new(&mut store, WriteMode::Inject)
        .commit(&session, &mut ScriptedPrompter::new(vec!["y"]))
        .unwrap();

    assert_eq!(outcome, CommitOutcome::Injected(None));
    assert_eq!(store.rows()[0][10], "");
    assert!(store.audit.is_empty());
}

#[test]
fn test_bulk_overwrites_with_merged_dataset() {
    let ds = two_rows();
    let cols = schema();
    let mut store = MemoryStore::new(&ds);

    let rec = Record::materialize(&ds, RowSelector::Label(RowLabel(0))).unwrap();
    let mut session = EditSession::new(rec, &cols);
    session
        .set_progress("Done", &mut ScriptedPrompter::new(Vec::<String>::new()))
        .unwrap();

    let outcome = CommitProtocol::new(&mut store, WriteMode::Bulk)
        .commit(&session, &mut ScriptedPrompter::new(vec!["y"]))
        .unwrap();

    // merge inserts before the old row instead of replacing it
    assert_eq!(outcome, CommitOutcome::Overwritten { rows: 3 });
    assert_eq!(store.rows().len(), 3);
    assert_eq!(store.rows()[0][9], "DONE");
    assert_eq!(store.rows()[1][9], "ToDo");
    assert_eq!(store.rows()[2][9], "WIP");
}

#[test]
fn test_declined_commit_leaves_remote_untouched() {
    let ds = two_rows();
    let cols = schema();
    let mut store = MemoryStore::new(&ds);
    let before = store.rows().to_vec();

    let rec = Record::materialize(&ds, RowSelector::Label(RowLabel(1))).unwrap();
    let mut session = EditSession::new(rec, &cols);
    session
        .set_progress("Done", &mut ScriptedPrompter::new(Vec::<String>::new()))
        .unwrap();

    for mode in [WriteMode::Inject, WriteMode::Bulk] {
        let outcome = CommitProtocol::new(&mut store, mode)
            .commit(&session, &mut ScriptedPrompter::new(vec!["n"]))
            .unwrap();
        assert_eq!(outcome, CommitOutcome::Aborted);
    }
    assert_eq!(store.rows(), before.as_slice());
}

#[test]
fn test_unmodified_session_has_nothing_to_commit() {
    let ds = two_rows();
    let cols = schema();
    let mut store = MemoryStore::new(&ds);

    let rec = Record::materialize(&ds, RowSelector::Label(RowLabel(0))).unwrap();
    let session = EditSession::new(rec, &cols);
    let mut prompter = ScriptedPrompter::new(vec!["y"]);

    let outcome = CommitProtocol::new(&mut store, WriteMode::Inject)
        .commit(&session, &mut prompter)
        .unwrap();

    assert_eq!(outcome, CommitOutcome::NothingToCommit);
    assert!(prompter.asked().is_empty());
}

#[test]
fn test_unreachable_remote_surfaces_error() {
    let ds = two_rows();
    let cols = schema();
    let mut store = MemoryStore::new(&ds);
    store.offline = true;

    let rec = Record::materialize(&ds, RowSelector::Label(RowLabel(0))).unwrap();
    let mut session = EditSession::new(rec, &cols);
    session
        .add_note("hello", &mut ScriptedPrompter::new(Vec::<String>::new()))
        .unwrap();

    let err = CommitProtocol::new(&mut store, WriteMode::Bulk)
        .commit(&session, &mut ScriptedPrompter::new(vec!["y"]))
        .unwrap_err();
    assert!(matches!(err, AppError::RemoteUnavailable(_)));
}

#[test]
fn test_find_row_number_is_one_based() {
    let ds = two_rows();
    assert_eq!(find_row_number(&ds, "Position", "1"), Some(1));
    assert_eq!(find_row_number(&ds, "Position", "2"), Some(2));
    assert_eq!(find_row_number(&ds, "Position", "3"), None);
}

#[test]
fn test_memory_store_row_access() {
    let ds = two_rows();
    let mut store = MemoryStore::new(&ds);

    assert_eq!(store.fetch_row_values(2).unwrap()[0], "2");
    assert!(matches!(
        store.fetch_row_values(0).unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        store.write_row(5, &[]).unwrap_err(),
        AppError::NotFound(_)
    ));
}
