use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Parse `YYYY-MM` into (year, month).
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    Ok((d.year(), d.month()))
}

pub fn first_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}")))
}

pub fn last_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(ny, nm)?
        .pred_opt()
        .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}")))
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// Bounds of a single period token: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let bad = || AppError::InvalidPeriod(p.to_string());
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| bad())?;
            Ok((first_of_month(y, 1)?, last_of_month(y, 12)?))
        }
        7 => {
            let (y, m) = parse_month(p).map_err(|_| bad())?;
            Ok((first_of_month(y, m)?, last_of_month(y, m)?))
        }
        10 => {
            let d = parse_date(p).ok_or_else(bad)?;
            Ok((d, d))
        }
        _ => Err(bad()),
    }
}

/// Parse a period filter into an inclusive date range.
///
/// Accepts `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or two of them joined by `:`
/// (both sides with the same granularity).
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{p}: start and end must have the same format"
            )));
        }
        let (from, _) = period_bounds(start)?;
        let (_, to) = period_bounds(end)?;
        if from > to {
            return Err(AppError::InvalidPeriod(format!("{p}: start is after end")));
        }
        return Ok((from, to));
    }

    period_bounds(p)
}
