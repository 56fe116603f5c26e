use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rtr, sample_csv, setup_test_store};

/// Init a store of the given backend and import the sample sheet.
fn init_with_sample(name: &str, backend: &str, ext: &str) -> String {
    let store = setup_test_store(name, ext);
    let input = sample_csv(name);

    rtr(name)
        .args(["--store", &store, "--backend", backend, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    rtr(name)
        .args([
            "--store", &store, "--backend", backend, "--yes", "import", "--file", &input,
        ])
        .assert()
        .success()
        .stdout(contains("Imported 3 row(s)"));

    store
}

#[test]
fn test_list_and_filters() {
    let store = init_with_sample("cli_list", "sqlite", "sqlite");

    rtr("cli_list")
        .args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(contains("3 row(s)"))
        .stdout(contains("Write the readme"))
        .stdout(contains("Cover the parser"));

    rtr("cli_list")
        .args(["--store", &store, "list", "--progress", "wip"])
        .assert()
        .success()
        .stdout(contains("Parse the config"))
        .stdout(contains("Write the readme").not());

    rtr("cli_list")
        .args(["--store", &store, "list", "--tier", "Silver"])
        .assert()
        .success()
        .stdout(contains("1 row(s)"))
        .stdout(contains("Cover the parser"));

    rtr("cli_list")
        .args(["--store", &store, "list", "--progress", "paused"])
        .assert()
        .failure()
        .stderr(contains("unknown status"));
}

#[test]
fn test_show_single_row() {
    let store = init_with_sample("cli_show", "sqlite", "sqlite");

    rtr("cli_show")
        .args(["--store", &store, "show", "2"])
        .assert()
        .success()
        .stdout(contains("Parse the config"))
        .stdout(contains("G-1"));

    rtr("cli_show")
        .args(["--store", &store, "show", "9"])
        .assert()
        .failure()
        .stderr(contains("Not a single row"));
}

#[test]
fn test_progress_edit_is_injected() {
    let store = init_with_sample("cli_progress", "sqlite", "sqlite");

    rtr("cli_progress")
        .args(["--store", &store, "--yes", "progress", "1", "done"])
        .assert()
        .success()
        .stdout(contains("Row 1 updated"));

    rtr("cli_progress")
        .args(["--store", &store, "show", "1"])
        .assert()
        .success()
        .stdout(contains("DONE"))
        .stdout(contains("Completed"));

    rtr("cli_progress")
        .args(["--store", &store, "list"])
        .assert()
        .success()
        .stdout(contains("3 row(s)"));

    rtr("cli_progress")
        .args(["--store", &store, "--yes", "progress", "1", "finished"])
        .assert()
        .failure()
        .stderr(contains("no valid status selected"));

    rtr("cli_progress")
        .args(["--store", &store, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("import"))
        .stdout(contains("progress"));
}

#[test]
fn test_bulk_mode_keeps_pushed_down_row() {
    let store = init_with_sample("cli_bulk", "sqlite", "sqlite");

    rtr("cli_bulk")
        .args(["--store", &store, "--mode", "bulk", "--yes", "progress", "3", "wip"])
        .assert()
        .success()
        .stdout(contains("overwritten (4 rows)"));

    rtr("cli_bulk")
        .args(["--store", &store, "list", "--tier", "Silver"])
        .assert()
        .success()
        .stdout(contains("2 row(s)"));
}

#[test]
fn test_note_add_append_delete() {
    let store = init_with_sample("cli_note", "sqlite", "sqlite");

    rtr("cli_note")
        .args(["--store", &store, "--yes", "note", "1", "add", "hello there"])
        .assert()
        .success();

    rtr("cli_note")
        .args(["--store", &store, "show", "1"])
        .assert()
        .success()
        .stdout(contains("hello there"));

    rtr("cli_note")
        .args(["--store", &store, "--yes", "note", "2", "add", "second"])
        .assert()
        .success();

    rtr("cli_note")
        .args(["--store", &store, "show", "2"])
        .assert()
        .success()
        .stdout(contains("New Note:"))
        .stdout(contains("second"));

    rtr("cli_note")
        .args(["--store", &store, "--yes", "note", "2", "update", "more"])
        .assert()
        .success()
        .stdout(contains("Row 2 updated"));

    rtr("cli_note")
        .args(["--store", &store, "show", "2"])
        .assert()
        .success()
        .stdout(contains("more"));

    rtr("cli_note")
        .args(["--store", &store, "--yes", "note", "1", "delete"])
        .assert()
        .success();

    rtr("cli_note")
        .args(["--store", &store, "show", "1"])
        .assert()
        .success()
        .stdout(contains("hello there").not());

    rtr("cli_note")
        .args(["--store", &store, "--yes", "note", "1", "delete"])
        .assert()
        .success()
        .stdout(contains("already empty"));
}

#[test]
fn test_csv_backend_and_export() {
    let store = init_with_sample("cli_csv", "csv", "csv");

    rtr("cli_csv")
        .args([
            "--store", &store, "--backend", "csv", "--yes", "progress", "2", "missed",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&store).expect("read csv store");
    assert!(content.contains("MISSED"));
    assert!(content.contains("Unfinished"));

    let out_json = setup_test_store("cli_csv_export", "json");
    rtr("cli_csv")
        .args([
            "--store", &store, "--backend", "csv", "export", "--format", "json", "--file",
            &out_json,
        ])
        .assert()
        .success()
        .stdout(contains("Exported 3 row(s)"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_json).expect("read json")).expect("parse");
    assert_eq!(json.as_array().map(|a| a.len()), Some(3));
    assert_eq!(json[1]["Progress"], "MISSED");

    let out_csv = setup_test_store("cli_csv_export", "csv");
    rtr("cli_csv")
        .args([
            "--store", &store, "--backend", "csv", "export", "--file", &out_csv,
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out_csv).unwrap().contains("MISSED"));
}
