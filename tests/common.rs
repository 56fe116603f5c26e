#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rtracker::models::dataset::{Dataset, Row};
use rtracker::models::schema::ColumnSchema;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command with HOME pointed at a private temp dir so no user config leaks in.
pub fn rtr(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_rtracker_home", name));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rtracker");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtracker.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the two-row sample sheet as CSV and return its path
pub fn sample_csv(name: &str) -> String {
    let path = setup_test_store(&format!("{}_input", name), "csv");
    let content = "\
Position,Tier,Tier Prefix,DoD,Performance,Criteria Group,Criteria Topic,Criteria Ref,Criteria,Progress,Notes,Linked Ref
1,Gold,G,Planned,High,Docs,Readme,G-1,Write the readme,ToDo,,
2,Gold,G,In Progress,Low,Code,Parser,G-2,Parse the config,WIP,x,G-1
3,Silver,S,Planned,Mid,Code,Tests,S-1,Cover the parser,ToDo,Add a note,
";
    fs::write(&path, content).expect("write sample csv");
    path
}

pub fn schema() -> ColumnSchema {
    ColumnSchema::default()
}

/// Row with the given tracking fields; descriptive columns get fixed values.
pub fn row(position: &str, progress: &str, dod: &str, notes: &str) -> Row {
    let s = schema();
    Row::from_pairs(vec![
        (s.position.clone(), position.to_string()),
        (s.tier.clone(), "Gold".to_string()),
        (s.tier_prefix.clone(), "G".to_string()),
        (s.dod.clone(), dod.to_string()),
        (s.performance.clone(), "High".to_string()),
        (s.criteria_group.clone(), "Docs".to_string()),
        (s.criteria_topic.clone(), "Readme".to_string()),
        (s.criteria_ref.clone(), format!("G-{}", position)),
        (s.criteria.clone(), format!("Criterion {}", position)),
        (s.progress.clone(), progress.to_string()),
        (s.notes.clone(), notes.to_string()),
        (s.linked_ref.clone(), String::new()),
    ])
}

pub fn dataset(rows: Vec<Row>) -> Dataset {
    Dataset::from_rows(schema().headers(), rows)
}

/// The two-row dataset used across the engine tests.
pub fn two_rows() -> Dataset {
    dataset(vec![
        row("1", "ToDo", "Planned", ""),
        row("2", "WIP", "InProgress", "x"),
    ])
}

pub fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

pub const FIXED_STAMP: &str = "2025-03-14 09:30:00";
