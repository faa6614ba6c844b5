use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::{ensure_writable, resolve_output};
use crate::export::json::write_json;
use crate::export::notify_export_success;
use crate::models::Entry;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_period;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Entries to export, ordered by date, timestamp and id.
    ///
    /// `range`: `None`, `"all"` or a period such as `YYYY`, `YYYY-MM`,
    /// `YYYY-MM-DD` or `A:B`.
    pub fn select<S: EntryStore>(store: &S, range: Option<&str>) -> AppResult<Vec<Entry>> {
        match range {
            Some(r) if !r.eq_ignore_ascii_case("all") => {
                let (from, to) = parse_period(r)?;
                store.get_in_range(from, to)
            }
            _ => {
                let mut all = store.get_all()?;
                all.sort_by(|a, b| (a.date, a.timestamp, a.id).cmp(&(b.date, b.timestamp, b.id)));
                Ok(all)
            }
        }
    }

    /// Export entries to `file`. Returns the written path and row count.
    ///
    /// An empty selection still produces a valid file (CSV header only,
    /// or `[]` for JSON).
    pub fn export<S: EntryStore>(
        store: &S,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<(PathBuf, usize)> {
        let path = resolve_output(file)?;
        ensure_writable(&path, force)?;

        let entries = Self::select(store, range)?;
        if entries.is_empty() {
            warning("No entries found for the selected range.");
        }

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        let writer = BufWriter::new(File::create(&path)?);
        match format {
            ExportFormat::Csv => write_csv(writer, &entries)?,
            ExportFormat::Json => write_json(writer, &entries)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), entries.len(), &path);
        Ok((path, entries.len()))
    }
}
