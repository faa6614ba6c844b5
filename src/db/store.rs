//! The record store: create / read / update / delete of entries.
//!
//! Core logic is written against [`EntryStore`] so it can run on the SQLite
//! implementation or on a test double.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntryPatch, NewEntry};
use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::Path;

pub trait EntryStore {
    /// Insert a new entry; returns the identifier assigned by the store.
    fn add(&mut self, entry: &NewEntry) -> AppResult<i64>;

    /// Insert every entry or none of them.
    fn add_many(&mut self, entries: &[NewEntry]) -> AppResult<Vec<i64>>;

    /// Every stored entry, ordered by identifier.
    fn get_all(&self) -> AppResult<Vec<Entry>>;

    fn get_one(&self, id: i64) -> AppResult<Entry>;

    /// Entries dated within `[from, to]`, ordered by date then timestamp.
    fn get_in_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Entry>>;

    fn get_by_date(&self, date: NaiveDate) -> AppResult<Vec<Entry>> {
        self.get_in_range(date, date)
    }

    /// Remove an entry. Deleting a missing id is not an error; the return
    /// value tells whether something was removed.
    fn delete_one(&mut self, id: i64) -> AppResult<bool>;

    /// Patch an entry in place, keeping its identifier.
    fn update(&mut self, id: i64, patch: &EntryPatch) -> AppResult<Entry>;
}

/// SQLite-backed store. Each mutating call runs in its own transaction.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::open(path)?,
        })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::open_in_memory()?,
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn path(&self) -> Option<&Path> {
        self.pool.path.as_deref()
    }
}

impl EntryStore for SqliteStore {
    fn add(&mut self, entry: &NewEntry) -> AppResult<i64> {
        let tx = self.pool.conn.transaction().map_err(AppError::Write)?;
        let id = queries::insert_entry(&tx, entry).map_err(AppError::Write)?;
        tx.commit().map_err(AppError::Write)?;
        Ok(id)
    }

    fn add_many(&mut self, entries: &[NewEntry]) -> AppResult<Vec<i64>> {
        let tx = self.pool.conn.transaction().map_err(AppError::Write)?;
        let mut ids = Vec::with_capacity(entries.len());
        for e in entries {
            ids.push(queries::insert_entry(&tx, e).map_err(AppError::Write)?);
        }
        tx.commit().map_err(AppError::Write)?;
        Ok(ids)
    }

    fn get_all(&self) -> AppResult<Vec<Entry>> {
        queries::load_all(&self.pool.conn).map_err(AppError::Read)
    }

    fn get_one(&self, id: i64) -> AppResult<Entry> {
        queries::load_one(&self.pool.conn, id)
            .map_err(AppError::Read)?
            .ok_or(AppError::NotFound(id))
    }

    fn get_in_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Entry>> {
        queries::load_in_range(&self.pool.conn, &from, &to).map_err(AppError::Read)
    }

    fn delete_one(&mut self, id: i64) -> AppResult<bool> {
        let tx = self.pool.conn.transaction().map_err(AppError::Write)?;
        let removed = queries::delete_entry(&tx, id).map_err(AppError::Write)?;
        tx.commit().map_err(AppError::Write)?;
        Ok(removed > 0)
    }

    fn update(&mut self, id: i64, patch: &EntryPatch) -> AppResult<Entry> {
        let tx = self.pool.conn.transaction().map_err(AppError::Write)?;

        let current = queries::load_one(&tx, id)
            .map_err(AppError::Read)?
            .ok_or(AppError::NotFound(id))?;
        let updated = patch.apply(&current)?;

        queries::update_entry(&tx, &updated).map_err(AppError::Write)?;
        tx.commit().map_err(AppError::Write)?;
        Ok(updated)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Measures, ValueChange};
    use chrono::NaiveTime;

    fn new_entry(date: &str, hhmm: &str, m: Measures) -> NewEntry {
        let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let t = NaiveTime::parse_from_str(hhmm, "%H:%M").unwrap();
        NewEntry::at(d, t, m).unwrap()
    }

    fn store() -> SqliteStore {
        SqliteStore::open_in_memory().unwrap()
    }

    #[test]
    fn add_assigns_distinct_increasing_ids() {
        let mut s = store();
        let inputs = vec![
            new_entry("2024-01-02", "08:00", Measures::new(Some(1.0), None, None, None)),
            new_entry("2024-01-01", "09:00", Measures::new(None, Some(2.0), None, None)),
            new_entry("2024-01-01", "07:00", Measures::new(None, None, None, Some(30.0))),
        ];

        let ids: Vec<i64> = inputs.iter().map(|e| s.add(e).unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let all = s.get_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
        for (stored, input) in all.iter().zip(&inputs) {
            assert_eq!(&stored.to_new(), input);
        }
    }

    #[test]
    fn get_one_roundtrip() {
        let mut s = store();
        let e = new_entry("2024-05-17", "21:45", Measures::new(Some(0.5), None, Some(3.0), None));
        let id = s.add(&e).unwrap();

        let got = s.get_one(id).unwrap();
        assert_eq!(got.id, id);
        assert_eq!(got.to_new(), e);
    }

    #[test]
    fn delete_then_get_is_not_found_and_delete_is_idempotent() {
        let mut s = store();
        let id = s
            .add(&new_entry("2024-01-01", "08:00", Measures::new(Some(1.0), None, None, None)))
            .unwrap();

        assert!(s.delete_one(id).unwrap());
        assert!(matches!(s.get_one(id), Err(AppError::NotFound(x)) if x == id));
        assert!(!s.delete_one(id).unwrap());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut s = store();
        let e = new_entry("2024-01-01", "08:00", Measures::new(Some(1.0), None, None, None));
        let first = s.add(&e).unwrap();
        s.delete_one(first).unwrap();
        let second = s.add(&e).unwrap();
        assert!(second > first);
    }

    #[test]
    fn update_keeps_identifier() {
        let mut s = store();
        let id = s
            .add(&new_entry("2024-01-01", "08:00", Measures::new(Some(1.0), None, None, None)))
            .unwrap();

        let patch = EntryPatch {
            values: [
                ValueChange::Keep,
                ValueChange::Keep,
                ValueChange::Set(2.5),
                ValueChange::Keep,
            ],
            ..Default::default()
        };
        let updated = s.update(id, &patch).unwrap();
        assert_eq!(updated.id, id);

        let all = s.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], updated);
        assert_eq!(all[0].measures, Measures::new(Some(1.0), None, Some(2.5), None));
    }

    #[test]
    fn update_missing_or_invalid_writes_nothing() {
        let mut s = store();
        let id = s
            .add(&new_entry("2024-01-01", "08:00", Measures::new(Some(1.0), None, None, None)))
            .unwrap();

        assert!(matches!(
            s.update(id + 1, &EntryPatch::default()),
            Err(AppError::NotFound(_))
        ));

        let clear_all = EntryPatch {
            values: [ValueChange::Clear; 4],
            ..Default::default()
        };
        assert!(matches!(s.update(id, &clear_all), Err(AppError::Validation(_))));
        assert_eq!(
            s.get_one(id).unwrap().measures,
            Measures::new(Some(1.0), None, None, None)
        );
    }

    #[test]
    fn range_query_is_chronological() {
        let mut s = store();
        s.add(&new_entry("2024-01-03", "08:00", Measures::new(Some(1.0), None, None, None)))
            .unwrap();
        s.add(&new_entry("2024-01-02", "18:00", Measures::new(Some(1.0), None, None, None)))
            .unwrap();
        s.add(&new_entry("2024-01-02", "06:00", Measures::new(Some(1.0), None, None, None)))
            .unwrap();

        let from = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let got = s.get_in_range(from, from).unwrap();
        assert_eq!(got.len(), 2);
        assert!(got[0].timestamp < got[1].timestamp);
        assert_eq!(s.get_by_date(from).unwrap(), got);
    }
}
