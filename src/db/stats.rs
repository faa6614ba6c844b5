use crate::db::migrate::{STORE_NAME, schema_version};
use crate::db::queries::{count_distinct_dates, count_entries, date_bounds};
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Figures shown by `db --info`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbInfo {
    pub schema_version: i32,
    pub entries: i64,
    pub days: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

impl DbInfo {
    pub fn average_per_day(&self) -> Option<f64> {
        if self.days == 0 {
            None
        } else {
            Some(self.entries as f64 / self.days as f64)
        }
    }
}

pub fn collect_db_info(store: &SqliteStore) -> AppResult<DbInfo> {
    let conn = store.conn();
    let bounds = date_bounds(conn)?;
    Ok(DbInfo {
        schema_version: schema_version(conn)?,
        entries: count_entries(conn)?,
        days: count_distinct_dates(conn)?,
        first_date: bounds.as_ref().map(|(f, _)| f.clone()),
        last_date: bounds.map(|(_, l)| l),
    })
}

pub fn print_db_info(store: &SqliteStore) -> AppResult<()> {
    let info = collect_db_info(store)?;
    println!();

    if let Some(path) = store.path() {
        let file_size = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let file_kb = (file_size as f64) / 1024.0;
        println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, path.display(), RESET);
        println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);
    }

    println!(
        "{}• Store:{} {} (schema v{})",
        CYAN, RESET, STORE_NAME, info.schema_version
    );
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, info.entries, RESET
    );

    let dash = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", info.first_date.as_deref().unwrap_or(&dash));
    println!("    to:   {}", info.last_date.as_deref().unwrap_or(&dash));

    if let Some(avg) = info.average_per_day() {
        println!(
            "{}• Average entries/day:{} {:.2} over {} day(s)",
            CYAN, RESET, avg, info.days
        );
    }

    println!();
    Ok(())
}
