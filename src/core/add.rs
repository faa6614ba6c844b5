use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::models::{Measures, NewEntry};
use crate::utils::time::now_hhmm;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate and store one submission; returns the new identifier.
    ///
    /// A submission without any value is rejected before the store is
    /// touched. A missing time of day defaults to the current local time.
    pub fn submit<S: EntryStore>(
        store: &mut S,
        date: NaiveDate,
        time: Option<NaiveTime>,
        measures: Measures,
    ) -> AppResult<i64> {
        let entry = NewEntry::at(date, time.unwrap_or_else(now_hhmm), measures)?;
        entry.validate()?;
        store.add(&entry)
    }
}
