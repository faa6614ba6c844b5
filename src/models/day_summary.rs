use super::measures::Totals;
use chrono::NaiveDate;
use serde::Serialize;

/// Totals of one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub entries: usize,
    pub totals: Totals,
}

impl DaySummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            entries: 0,
            totals: Totals::default(),
        }
    }
}
