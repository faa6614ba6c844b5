use super::measures::Measures;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{local_time_of_day, local_to_utc};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// A persisted measurement record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub id: i64,            // ⇔ entries.id (AUTOINCREMENT, never supplied by callers)
    pub date: NaiveDate,    // ⇔ entries.date (TEXT "YYYY-MM-DD")
    pub timestamp: DateTime<Utc>, // ⇔ entries.timestamp (TEXT, RFC 3339 UTC)
    pub measures: Measures, // ⇔ entries.value1..value4 (REAL, nullable)
}

impl Entry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Local wall-clock time at which the entry was recorded.
    pub fn local_time(&self) -> NaiveTime {
        local_time_of_day(&self.timestamp)
    }

    /// The entry without its identifier.
    pub fn to_new(&self) -> NewEntry {
        NewEntry {
            date: self.date,
            timestamp: self.timestamp,
            measures: self.measures,
        }
    }
}

/// An entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub measures: Measures,
}

impl NewEntry {
    /// Build an entry from a date and a local time of day.
    pub fn at(date: NaiveDate, time: NaiveTime, measures: Measures) -> AppResult<Self> {
        Ok(Self {
            date,
            timestamp: local_to_utc(date, time)?,
            measures,
        })
    }

    pub fn validate(&self) -> AppResult<()> {
        require_any_value(&self.measures)
    }
}

pub(crate) fn require_any_value(m: &Measures) -> AppResult<()> {
    if m.has_any() {
        Ok(())
    } else {
        Err(AppError::Validation(
            "at least one of the four values must be provided".into(),
        ))
    }
}

/// How a single value changes during an edit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ValueChange {
    #[default]
    Keep,
    Set(f64),
    Clear,
}

impl ValueChange {
    fn apply(self, current: Option<f64>) -> Option<f64> {
        match self {
            ValueChange::Keep => current,
            ValueChange::Set(v) => Some(v),
            ValueChange::Clear => None,
        }
    }
}

/// Partial update for an existing entry. Fields left at their default are
/// not touched; the identifier is never changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub values: [ValueChange; 4],
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.time.is_none()
            && self.values.iter().all(|v| *v == ValueChange::Keep)
    }

    /// Produce the patched entry. The timestamp is recomputed when either the
    /// date or the time of day changes; an unchanged time of day is carried
    /// over from the existing timestamp.
    pub fn apply(&self, entry: &Entry) -> AppResult<Entry> {
        let date = self.date.unwrap_or(entry.date);

        let timestamp = if self.date.is_some() || self.time.is_some() {
            let time = self.time.unwrap_or_else(|| entry.local_time());
            local_to_utc(date, time)?
        } else {
            entry.timestamp
        };

        let current = entry.measures.to_array();
        let mut next = current;
        for (slot, change) in next.iter_mut().zip(self.values) {
            *slot = change.apply(*slot);
        }
        let measures = Measures::from_array(next);
        require_any_value(&measures)?;

        Ok(Entry {
            id: entry.id,
            date,
            timestamp,
            measures,
        })
    }
}
