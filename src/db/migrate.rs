use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Name of the table holding entries.
pub const STORE_NAME: &str = "entries";

/// Structural revision written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `entries` table exists.
pub fn entries_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([STORE_NAME], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            date       TEXT NOT NULL,
            timestamp  TEXT NOT NULL,
            value1     REAL,
            value2     REAL,
            value3     REAL,
            value4     REAL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date_ts ON entries(date, timestamp);
        "#,
    )?;
    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Bring the database to [`SCHEMA_VERSION`].
///
/// There is exactly one structural revision: an empty file (version 0) is
/// initialized, version 1 is left alone, anything newer is refused.
/// Returns `true` when the schema was created by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<bool> {
    let version = schema_version(conn)?;

    if version > SCHEMA_VERSION {
        return Err(AppError::StorageUnavailable(format!(
            "database schema version {version} is newer than the supported version {SCHEMA_VERSION}"
        )));
    }

    ensure_log_table(conn)?;
    create_entries_table(conn)?;

    if version == SCHEMA_VERSION {
        return Ok(false);
    }

    conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    ttlog(
        conn,
        "migration_applied",
        &format!("v{SCHEMA_VERSION}"),
        "Created entries store",
    )?;
    success(format!(
        "Created '{STORE_NAME}' store (schema v{SCHEMA_VERSION})."
    ));

    Ok(true)
}

/// Structural problems found by `db --check`; empty when the schema is sound.
pub fn schema_problems(conn: &Connection) -> Result<Vec<String>> {
    let mut problems = Vec::new();

    if !entries_table_exists(conn)? {
        problems.push(format!("table '{STORE_NAME}' is missing"));
    }
    let version = schema_version(conn)?;
    if version != SCHEMA_VERSION {
        problems.push(format!(
            "schema version is {version}, expected {SCHEMA_VERSION}"
        ));
    }

    Ok(problems)
}
