#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dl() -> Command {
    cargo_bin_cmd!("dailylog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dailylog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dailylog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    dl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    dl().args([
        "--db", db_path, "add", "--date", "2025-09-01", "--time", "08:00", "--v1", "2",
        "--v3", "1.5",
    ])
    .assert()
    .success();

    dl().args([
        "--db", db_path, "add", "--date", "2025-09-01", "--time", "19:30", "--v1", "1",
    ])
    .assert()
    .success();

    dl().args([
        "--db", db_path, "add", "--date", "2025-09-15", "--time", "07:15", "--v4", "45",
    ])
    .assert()
    .success();
}

/// Ids currently stored, in ascending order.
pub fn stored_ids(db_path: &str) -> Vec<i64> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare("SELECT id FROM entries ORDER BY id")
        .expect("prepare");
    stmt.query_map([], |r| r.get(0))
        .expect("query")
        .map(|r| r.expect("row"))
        .collect()
}
