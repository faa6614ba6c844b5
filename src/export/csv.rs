use crate::errors::{AppError, AppResult};
use crate::export::model::{CSV_HEADERS, EntryExport, EntryImportRow};
use crate::models::Entry;
use std::io::{Read, Write};

/// Write `entries` as CSV. The header row is always written, so an empty
/// slice produces exactly one line.
pub fn write_csv<W: Write>(writer: W, entries: &[Entry]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for e in entries {
        wtr.write_record(EntryExport::from(e).to_record())?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(entries: &[Entry]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, entries)?;
    String::from_utf8(buf).map_err(|e| AppError::Export(e.to_string()))
}

/// A parsed CSV row together with the line it came from.
#[derive(Debug)]
pub struct CsvRow {
    pub line: u64,
    pub row: EntryImportRow,
}

/// Read rows by header name. Blank lines are skipped, cells are trimmed and
/// rows may have fewer columns than the header.
pub fn read_csv<R: Read>(reader: R) -> AppResult<Vec<CsvRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if !headers.iter().any(|h| h == "date") {
        return Err(AppError::Import {
            line: 1,
            reason: "missing 'date' column in header".into(),
        });
    }

    let mut out = Vec::new();
    for result in rdr.records() {
        let mut record = result?;
        let line = record.position().map_or(0, |p| p.line());

        if record.iter().all(|f| f.is_empty()) {
            continue;
        }

        // Short rows: missing trailing cells read as empty, whatever column they belong to.
        while record.len() < headers.len() {
            record.push_field("");
        }

        let row: EntryImportRow = record
            .deserialize(Some(&headers))
            .map_err(|e| AppError::Import {
                line,
                reason: e.to_string(),
            })?;
        out.push(CsvRow { line, row });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Measures;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn empty_export_is_header_only() {
        let out = to_csv_string(&[]).unwrap();
        assert_eq!(out, "id,date,timestamp,value1,value2,value3,value4\n");
    }

    #[test]
    fn rows_leave_absent_values_empty() {
        let e = Entry {
            id: 3,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap(),
            measures: Measures::new(Some(2.0), None, Some(0.5), None),
        };
        let out = to_csv_string(&[e]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "3,2024-01-01,2024-01-01T08:30:00.000Z,2,,0.5,");
    }

    #[test]
    fn reads_by_header_and_ignores_extra_columns() {
        let text = "id,date,content,timestamp,value1\n\
                    9, 2024-01-01 ,hello,,3\n\
                    \n\
                    10,2024-01-02\n";
        let rows = read_csv(text.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].row.date.as_deref(), Some("2024-01-01"));
        assert_eq!(rows[0].row.value1.as_deref(), Some("3"));
        assert_eq!(rows[1].row.value1, None);
    }

    #[test]
    fn short_row_missing_an_ignored_column_is_padded() {
        let text = "date,value1,id\n2024-03-01,3\n";
        let rows = read_csv(text.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row.date.as_deref(), Some("2024-03-01"));
        assert_eq!(rows[0].row.value1.as_deref(), Some("3"));
    }

    #[test]
    fn header_without_date_is_rejected() {
        let text = "id,content,timestamp\n1,x,\n";
        assert!(matches!(
            read_csv(text.as_bytes()),
            Err(AppError::Import { line: 1, .. })
        ));
    }
}
