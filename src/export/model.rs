use crate::models::Entry;
use crate::utils::time::format_timestamp;
use serde::{Deserialize, Serialize};

/// Column order shared by CSV export and import.
pub const CSV_HEADERS: [&str; 7] = [
    "id",
    "date",
    "timestamp",
    "value1",
    "value2",
    "value3",
    "value4",
];

/// Flat, text-friendly shape of an entry for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub timestamp: String,
    pub value1: Option<f64>,
    pub value2: Option<f64>,
    pub value3: Option<f64>,
    pub value4: Option<f64>,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            timestamp: format_timestamp(&e.timestamp),
            value1: e.measures.value1,
            value2: e.measures.value2,
            value3: e.measures.value3,
            value4: e.measures.value4,
        }
    }
}

impl EntryExport {
    /// CSV cells; absent values become empty cells.
    pub fn to_record(&self) -> Vec<String> {
        let cell = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
        vec![
            self.id.to_string(),
            self.date.clone(),
            self.timestamp.clone(),
            cell(self.value1),
            cell(self.value2),
            cell(self.value3),
            cell(self.value4),
        ]
    }
}

/// One CSV row as read back. Every column is optional at this stage so
/// that missing cells can be reported with a line number; `id` and any
/// unknown columns (such as the legacy `content`) are ignored.
#[derive(Deserialize, Debug, Default)]
pub struct EntryImportRow {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub value1: Option<String>,
    #[serde(default)]
    pub value2: Option<String>,
    #[serde(default)]
    pub value3: Option<String>,
    #[serde(default)]
    pub value4: Option<String>,
}
