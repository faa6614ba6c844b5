//! Time utilities: parsing HH:MM, local ⇄ UTC conversion, timestamp text.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Timelike, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Current local time of day, truncated to the minute.
pub fn now_hhmm() -> NaiveTime {
    let now = Local::now().time();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

/// Interpret `date` + `time` in the local zone and convert to UTC.
/// Ambiguous local times (DST fall-back) resolve to the earliest instant;
/// non-existent ones (DST gap) are rejected.
pub fn local_to_utc(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Utc>> {
    Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            AppError::InvalidTime(format!(
                "{} {} does not exist in the local time zone",
                date,
                time.format("%H:%M")
            ))
        })
}

pub fn local_time_of_day(ts: &DateTime<Utc>) -> NaiveTime {
    ts.with_timezone(&Local).time()
}

pub fn format_hhmm(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

/// Canonical stored form, e.g. `2024-01-01T08:30:00.000Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
