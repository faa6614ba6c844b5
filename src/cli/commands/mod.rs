pub mod add;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
pub mod summary;

use crate::cli::parser::MeasureArgs;
use crate::config::Config;
use crate::db::EntryStore;
use crate::errors::AppResult;
use crate::models::{Entry, Measures, Totals};
use crate::utils::date::{parse_date_arg, parse_period};
use crate::utils::formatting::{fmt_optional, fmt_value, parse_optional_measure};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hhmm;

/// Coerce the four `--vN` options into measures.
pub(crate) fn measures_from_args(args: &MeasureArgs) -> AppResult<Measures> {
    let mut values = [None; Measures::COUNT];
    for (slot, raw) in values.iter_mut().zip(args.as_array()) {
        *slot = parse_optional_measure(raw)?;
    }
    Ok(Measures::from_array(values))
}

/// Entries selected by `--date` or `--period`; everything when neither is
/// given. Always chronological.
pub(crate) fn select_entries<S: EntryStore>(
    store: &S,
    date: Option<&str>,
    period: Option<&str>,
) -> AppResult<Vec<Entry>> {
    if let Some(d) = date {
        return store.get_by_date(parse_date_arg(d)?);
    }
    if let Some(p) = period {
        let (from, to) = parse_period(p)?;
        return store.get_in_range(from, to);
    }
    let mut all = store.get_all()?;
    all.sort_by(|a, b| (a.date, a.timestamp, a.id).cmp(&(b.date, b.timestamp, b.id)));
    Ok(all)
}

/// Table with one row per entry: id, local time, the four values.
pub(crate) fn entries_table(cfg: &Config, entries: &[Entry]) -> Table {
    let mut columns = vec![Column::right("ID"), Column::left("Time")];
    columns.extend((0..Measures::COUNT).map(|i| Column::right(cfg.heading(i))));

    let mut table = Table::new(columns).with_separator(&cfg.separator_char);
    for e in entries {
        let mut row = vec![e.id.to_string(), format_hhmm(&e.timestamp)];
        row.extend(e.measures.to_array().into_iter().map(fmt_optional));
        table.add_row(row);
    }
    table
}

/// `Urine: 3 cups · Water: 1.5 cups`, skipping zero totals.
pub(crate) fn totals_line(cfg: &Config, totals: &Totals) -> String {
    let parts: Vec<String> = totals
        .to_array()
        .iter()
        .zip(&cfg.labels)
        .filter(|(v, _)| **v != 0.0)
        .map(|(v, l)| {
            if l.unit.is_empty() {
                format!("{}: {}", l.name, fmt_value(*v))
            } else {
                format!("{}: {} {}", l.name, fmt_value(*v), l.unit)
            }
        })
        .collect();

    if parts.is_empty() {
        "nothing recorded".to_string()
    } else {
        parts.join(" · ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_are_coerced() {
        let args = MeasureArgs {
            v1: Some("2".into()),
            v2: Some("0".into()),
            v3: None,
            v4: Some(" 1.5 ".into()),
        };
        let m = measures_from_args(&args).unwrap();
        assert_eq!(m, Measures::new(Some(2.0), None, None, Some(1.5)));

        let bad = MeasureArgs {
            v1: Some("two".into()),
            ..Default::default()
        };
        assert!(measures_from_args(&bad).is_err());
    }

    #[test]
    fn totals_line_uses_labels() {
        let cfg = Config::default();
        let line = totals_line(&cfg, &Totals::new(3.0, 0.0, 1.5, 0.0));
        assert_eq!(line, "Urine: 3 cups · Water: 1.5 cups");
        assert_eq!(totals_line(&cfg, &Totals::default()), "nothing recorded");
    }
}
