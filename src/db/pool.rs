//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub struct DbPool {
    pub conn: Connection,
    pub path: Option<PathBuf>,
}

fn unavailable(path: &Path, e: impl std::fmt::Display) -> AppError {
    AppError::StorageUnavailable(format!("{}: {}", path.display(), e))
}

impl DbPool {
    /// Open (and if needed create) the database file and make sure the
    /// schema is in place. Any failure is reported as `StorageUnavailable`.
    pub fn open(path: &str) -> AppResult<Self> {
        let path = expand_tilde(path);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| unavailable(parent, e))?;
        }

        let conn = Connection::open(&path).map_err(|e| unavailable(&path, e))?;
        Self::prepare(conn, Some(path))
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        Self::prepare(conn, None)
    }

    fn prepare(conn: Connection, path: Option<PathBuf>) -> AppResult<Self> {
        init_db(&conn).map_err(|e| match e {
            AppError::StorageUnavailable(_) => e,
            other => AppError::StorageUnavailable(other.to_string()),
        })?;
        Ok(Self { conn, path })
    }
}
