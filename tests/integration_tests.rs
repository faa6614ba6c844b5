use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{dl, init_db_with_data, setup_test_db, stored_ids};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_creates_schema");

    dl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |r| r.get(0))
        .unwrap();
    assert_eq!(version, 1);
}

#[test]
fn test_add_assigns_increasing_ids() {
    let db_path = setup_test_db("add_increasing_ids");
    init_db_with_data(&db_path);

    let ids = stored_ids(&db_path);
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_add_without_values_fails_and_stores_nothing() {
    let db_path = setup_test_db("add_without_values");
    dl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dl().args(["--db", &db_path, "add", "--date", "2025-01-01"])
        .assert()
        .failure()
        .stderr(contains("at least one"));

    dl().args(["--db", &db_path, "add", "--v2", "0"])
        .assert()
        .failure();

    assert!(stored_ids(&db_path).is_empty());
}

#[test]
fn test_add_rejects_bad_input() {
    let db_path = setup_test_db("add_bad_input");

    dl().args(["--db", &db_path, "add", "--date", "2025-02-30", "--v1", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    dl().args(["--db", &db_path, "add", "--time", "25:00", "--v1", "1"])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    dl().args(["--db", &db_path, "add", "--water", "lots"])
        .assert()
        .failure()
        .stderr(contains("Invalid number"));
}

#[test]
fn test_list_groups_by_date() {
    let db_path = setup_test_db("list_groups");
    init_db_with_data(&db_path);

    dl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-15"))
        .stdout(contains("Urine: 3 cups"))
        .stdout(contains("Walking: 45 min"));

    dl().args(["--db", &db_path, "list", "--date", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("2025-09-15").and(contains("2025-09-01").not()));
}

#[test]
fn test_list_empty_period() {
    let db_path = setup_test_db("list_empty");
    init_db_with_data(&db_path);

    dl().args(["--db", &db_path, "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("No entries."));

    dl().args(["--db", &db_path, "list", "--period", "2025-09:2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_summary_has_grand_total() {
    let db_path = setup_test_db("summary_total");
    init_db_with_data(&db_path);

    dl().args(["--db", &db_path, "summary", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("TOTAL"))
        .stdout(contains("Entries"));
}

#[test]
fn test_edit_keeps_id() {
    let db_path = setup_test_db("edit_keeps_id");
    init_db_with_data(&db_path);
    let id = stored_ids(&db_path)[0];

    dl().args([
        "--db",
        &db_path,
        "edit",
        "--id",
        &id.to_string(),
        "--v2",
        "4",
        "--clear",
        "v3",
    ])
    .assert()
    .success();

    assert_eq!(stored_ids(&db_path).len(), 3);

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let (v1, v2, v3): (Option<f64>, Option<f64>, Option<f64>) = conn
        .query_row(
            "SELECT value1, value2, value3 FROM entries WHERE id = ?1",
            [id],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .unwrap();
    assert_eq!((v1, v2, v3), (Some(2.0), Some(4.0), None));
}

#[test]
fn test_edit_missing_id_is_not_found() {
    let db_path = setup_test_db("edit_missing");
    init_db_with_data(&db_path);

    dl().args(["--db", &db_path, "edit", "--id", "999", "--v1", "1"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_del_is_idempotent() {
    let db_path = setup_test_db("del_idempotent");
    init_db_with_data(&db_path);
    let id = stored_ids(&db_path)[1].to_string();

    dl().args(["--db", &db_path, "del", "--id", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    dl().args(["--db", &db_path, "del", "--id", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));

    dl().args(["--db", &db_path, "show", "--id", &id])
        .assert()
        .failure()
        .stderr(contains("not found"));

    assert_eq!(stored_ids(&db_path).len(), 2);
}

#[test]
fn test_calendar_month() {
    let db_path = setup_test_db("calendar_month");
    init_db_with_data(&db_path);

    dl().args(["--db", &db_path, "calendar", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("September 2025"))
        .stdout(contains("Walking: 45 min"));

    dl().args(["--db", &db_path, "calendar", "--month", "2025-13"])
        .assert()
        .failure();
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db_with_data(&db_path);

    dl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    dl().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total entries"))
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Schema:").not());
}

#[test]
fn test_newer_schema_is_refused() {
    let db_path = setup_test_db("newer_schema");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch("PRAGMA user_version = 7;").unwrap();
    }

    dl().args(["--db", &db_path, "list"])
        .assert()
        .failure()
        .stderr(contains("Storage unavailable"));
}
