use crate::errors::AppResult;
use crate::export::model::EntryExport;
use crate::models::Entry;
use std::io::Write;

/// Write `entries` as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, entries: &[Entry]) -> AppResult<()> {
    let rows: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
