use crate::models::{Entry, Measures, NewEntry};
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRIES: &str =
    "SELECT id, date, timestamp, value1, value2, value3, value4 FROM entries";

fn date_to_db(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn conversion_error(
    idx: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<Entry> {
    let date_str: String = row.get("date")?;
    let ts_str: String = row.get("timestamp")?;

    let date =
        NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| conversion_error(1, e))?;

    let timestamp = parse_timestamp(&ts_str).ok_or_else(|| {
        conversion_error(
            2,
            std::io::Error::other(format!("invalid timestamp '{ts_str}'")),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        date,
        timestamp,
        measures: Measures::new(
            row.get("value1")?,
            row.get("value2")?,
            row.get("value3")?,
            row.get("value4")?,
        ),
    })
}

fn collect(conn: &Connection, sql: &str, args: impl rusqlite::Params) -> Result<Vec<Entry>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new entry and return the id SQLite assigned to it.
pub fn insert_entry(conn: &Connection, e: &NewEntry) -> Result<i64> {
    let m = &e.measures;
    conn.execute(
        "INSERT INTO entries (date, timestamp, value1, value2, value3, value4)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            date_to_db(&e.date),
            format_timestamp(&e.timestamp),
            m.value1,
            m.value2,
            m.value3,
            m.value4,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Rewrite every column except `id`. Returns the number of rows touched.
pub fn update_entry(conn: &Connection, e: &Entry) -> Result<usize> {
    let m = &e.measures;
    conn.execute(
        "UPDATE entries
         SET date = ?1, timestamp = ?2,
             value1 = ?3, value2 = ?4, value3 = ?5, value4 = ?6
         WHERE id = ?7",
        params![
            date_to_db(&e.date),
            format_timestamp(&e.timestamp),
            m.value1,
            m.value2,
            m.value3,
            m.value4,
            e.id,
        ],
    )
}

pub fn delete_entry(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM entries WHERE id = ?1", [id])
}

pub fn load_all(conn: &Connection) -> Result<Vec<Entry>> {
    collect(conn, &format!("{SELECT_ENTRIES} ORDER BY id ASC"), [])
}

pub fn load_one(conn: &Connection, id: i64) -> Result<Option<Entry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRIES} WHERE id = ?1"))?;
    stmt.query_row([id], map_row).optional()
}

/// Entries whose date lies in `[from, to]`, in chronological order.
pub fn load_in_range(conn: &Connection, from: &NaiveDate, to: &NaiveDate) -> Result<Vec<Entry>> {
    collect(
        conn,
        &format!(
            "{SELECT_ENTRIES} WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC, timestamp ASC, id ASC"
        ),
        params![date_to_db(from), date_to_db(to)],
    )
}

pub fn count_entries(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
}

/// First and last stored date, if any entry exists.
pub fn date_bounds(conn: &Connection) -> Result<Option<(String, String)>> {
    conn.query_row("SELECT MIN(date), MAX(date) FROM entries", [], |row| {
        let first: Option<String> = row.get(0)?;
        let last: Option<String> = row.get(1)?;
        Ok(first.zip(last))
    })
}

pub fn count_distinct_dates(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(DISTINCT date) FROM entries", [], |row| {
        row.get(0)
    })
}
