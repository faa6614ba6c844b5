use crate::cli::commands::select_entries;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{grand_total, summarize};
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::models::{DaySummary, Measures};
use crate::ui::messages::info;
use crate::utils::fmt_value;
use crate::utils::table::{Column, Table};

/// Per-date totals with a grand-total row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date, period } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let entries = select_entries(&store, date.as_deref(), period.as_deref())?;
        let days = summarize(&entries, None);

        if days.is_empty() {
            info("No entries.");
            return Ok(());
        }

        print!("{}", summary_table(cfg, &days).render());
    }

    Ok(())
}

fn summary_table(cfg: &Config, days: &[DaySummary]) -> Table {
    let mut columns = vec![Column::left("Date"), Column::right("Entries")];
    columns.extend((0..Measures::COUNT).map(|i| Column::right(cfg.heading(i))));

    let mut table = Table::new(columns).with_separator(&cfg.separator_char);
    for d in days {
        let mut row = vec![d.date.format("%Y-%m-%d").to_string(), d.entries.to_string()];
        row.extend(d.totals.to_array().into_iter().map(fmt_value));
        table.add_row(row);
    }

    let total = grand_total(days);
    let count: usize = days.iter().map(|d| d.entries).sum();
    let mut row = vec!["TOTAL".to_string(), count.to_string()];
    row.extend(total.to_array().into_iter().map(fmt_value));
    table.add_row(row);

    table
}
