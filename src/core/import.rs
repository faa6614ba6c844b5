use crate::db::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::export::csv::{CsvRow, read_csv};
use crate::models::{Measures, NewEntry};
use crate::utils::date::parse_date;
use crate::utils::formatting::parse_measure;
use crate::utils::time::{local_to_utc, now_hhmm, parse_timestamp};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Outcome of an import.
#[derive(Debug, Default, PartialEq)]
pub struct ImportReport {
    pub imported: usize,
    /// Rows without any value.
    pub skipped: usize,
    pub ids: Vec<i64>,
}

/// Entries parsed from a file, ready to be stored.
#[derive(Debug, Default)]
pub struct ImportPlan {
    pub entries: Vec<NewEntry>,
    pub skipped: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Parse a CSV stream into entries. Nothing is stored; the first bad
    /// row aborts the whole plan.
    pub fn read_plan<R: Read>(reader: R) -> AppResult<ImportPlan> {
        let mut plan = ImportPlan::default();

        for CsvRow { line, row } in read_csv(reader)? {
            let fail = |reason: String| AppError::Import { line, reason };

            let date_txt = row
                .date
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or_else(|| fail("missing date".into()))?;
            let date =
                parse_date(date_txt).ok_or_else(|| fail(format!("invalid date '{date_txt}'")))?;

            let mut values = [None; Measures::COUNT];
            let cells = [&row.value1, &row.value2, &row.value3, &row.value4];
            for (slot, cell) in values.iter_mut().zip(cells) {
                if let Some(text) = cell {
                    *slot = parse_measure(text).map_err(|e| fail(e.to_string()))?;
                }
            }
            let measures = Measures::from_array(values);

            if !measures.has_any() {
                plan.skipped += 1;
                continue;
            }

            let timestamp = match row.timestamp.as_deref().filter(|s| !s.is_empty()) {
                Some(ts) => parse_timestamp(ts)
                    .ok_or_else(|| fail(format!("invalid timestamp '{ts}'")))?,
                None => local_to_utc(date, now_hhmm()).map_err(|e| fail(e.to_string()))?,
            };

            plan.entries.push(NewEntry {
                date,
                timestamp,
                measures,
            });
        }

        Ok(plan)
    }

    /// Store a plan in a single all-or-nothing write.
    pub fn apply<S: EntryStore>(store: &mut S, plan: ImportPlan) -> AppResult<ImportReport> {
        let ids = if plan.entries.is_empty() {
            Vec::new()
        } else {
            store.add_many(&plan.entries)?
        };

        Ok(ImportReport {
            imported: ids.len(),
            skipped: plan.skipped,
            ids,
        })
    }

    pub fn import<S: EntryStore>(store: &mut S, path: &Path) -> AppResult<ImportReport> {
        let file = File::open(path)?;
        let plan = Self::read_plan(BufReader::new(file))?;
        Self::apply(store, plan)
    }
}
