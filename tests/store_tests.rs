use chrono::{NaiveDate, NaiveTime};
use dailylog::db::{EntryStore, SqliteStore};
use dailylog::errors::AppError;
use dailylog::models::{Measures, NewEntry};

mod common;
use common::setup_test_db;

fn entry(date: (i32, u32, u32), hour: u32, m: Measures) -> NewEntry {
    NewEntry::at(
        NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        m,
    )
    .unwrap()
}

#[test]
fn entries_survive_reopening() {
    let db_path = setup_test_db("store_reopen");
    let e = entry((2024, 4, 2), 9, Measures::new(Some(1.0), None, Some(2.5), None));

    let id = {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store.add(&e).unwrap()
    };

    let store = SqliteStore::open(&db_path).unwrap();
    let got = store.get_one(id).unwrap();
    assert_eq!(got.to_new(), e);
}

#[test]
fn bulk_insert_is_all_or_nothing() {
    let db_path = setup_test_db("store_bulk");
    let mut store = SqliteStore::open(&db_path).unwrap();

    let batch = vec![
        entry((2024, 4, 1), 8, Measures::new(Some(1.0), None, None, None)),
        entry((2024, 4, 2), 8, Measures::new(None, Some(1.0), None, None)),
    ];
    let ids = store.add_many(&batch).unwrap();
    assert_eq!(ids.len(), 2);

    // A trigger makes the second insert of the next batch fail.
    store
        .conn()
        .execute_batch(
            "CREATE TRIGGER no_walks BEFORE INSERT ON entries
             WHEN NEW.value4 IS NOT NULL
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

    let bad = vec![
        entry((2024, 4, 3), 8, Measures::new(Some(1.0), None, None, None)),
        entry((2024, 4, 4), 8, Measures::new(None, None, None, Some(30.0))),
    ];
    assert!(matches!(store.add_many(&bad), Err(AppError::Write(_))));
    assert_eq!(store.get_all().unwrap().len(), 2);
}
