use crate::errors::AppResult;
use crate::models::DaySummary;
use crate::utils::date::first_of_month;
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// First column of the calendar grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    fn offset(self, date: NaiveDate) -> usize {
        let wd = date.weekday();
        let n = match self {
            WeekStart::Monday => wd.num_days_from_monday(),
            WeekStart::Sunday => wd.num_days_from_sunday(),
        };
        n as usize
    }

    pub fn day_labels(self) -> [&'static str; 7] {
        match self {
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub summary: Option<DaySummary>,
}

impl CalendarDay {
    pub fn has_entries(&self) -> bool {
        self.summary.as_ref().is_some_and(|s| s.entries > 0)
    }
}

/// A month laid out as rows of seven cells; `None` cells pad the first and
/// last week.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub week_start: WeekStart,
    pub weeks: Vec<Vec<Option<CalendarDay>>>,
}

impl CalendarMonth {
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten().flatten()
    }
}

/// Build the grid for `year`-`month`, attaching the matching daily summaries.
pub fn build_month(
    year: i32,
    month: u32,
    summaries: &[DaySummary],
    week_start: WeekStart,
) -> AppResult<CalendarMonth> {
    let first = first_of_month(year, month)?;
    let by_date: HashMap<NaiveDate, &DaySummary> =
        summaries.iter().map(|s| (s.date, s)).collect();

    let mut cells: Vec<Option<CalendarDay>> = vec![None; week_start.offset(first)];
    cells.extend(
        first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|date| {
                Some(CalendarDay {
                    date,
                    summary: by_date.get(&date).map(|s| (*s).clone()),
                })
            }),
    );
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    let weeks = cells.chunks(7).map(<[_]>::to_vec).collect();

    Ok(CalendarMonth {
        year,
        month,
        week_start,
        weeks,
    })
}
