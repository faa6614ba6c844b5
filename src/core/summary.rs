use crate::models::{DaySummary, Entry, Totals};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Group `entries` by date and sum the four values of each group.
///
/// With `date_filter` only that date is considered. Dates come out in
/// ascending order. The function is pure: the same snapshot always yields
/// the same result.
pub fn summarize(entries: &[Entry], date_filter: Option<NaiveDate>) -> Vec<DaySummary> {
    let mut groups: BTreeMap<NaiveDate, DaySummary> = BTreeMap::new();

    for e in entries
        .iter()
        .filter(|e| date_filter.is_none_or(|d| e.date == d))
    {
        let day = groups
            .entry(e.date)
            .or_insert_with(|| DaySummary::empty(e.date));
        day.entries += 1;
        day.totals.add(&e.measures);
    }

    groups.into_values().collect()
}

/// Sum of several daily summaries (footer rows).
pub fn grand_total(days: &[DaySummary]) -> Totals {
    let mut total = Totals::default();
    for d in days {
        total.merge(&d.totals);
    }
    total
}
