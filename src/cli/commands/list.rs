use crate::cli::commands::{entries_table, select_entries, totals_line};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{grand_total, summarize};
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::models::Entry;
use crate::ui::messages::{header, info};
use crate::utils::colors::{BOLD, RESET};

/// Entries grouped by date: a header, the day totals, then each entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, date } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let entries = select_entries(&store, date.as_deref(), period.as_deref())?;

        if entries.is_empty() {
            info("No entries.");
            return Ok(());
        }

        let days = summarize(&entries, None);
        for day in &days {
            let of_day: Vec<Entry> = entries.iter().filter(|e| e.date == day.date).cloned().collect();

            header(day.date.format("%Y-%m-%d (%a)"));
            println!("{BOLD}Total:{RESET} {}", totals_line(cfg, &day.totals));
            println!("{}", entries_table(cfg, &of_day).render());
        }

        if days.len() > 1 {
            println!(
                "{BOLD}{} entries over {} days:{RESET} {}",
                entries.len(),
                days.len(),
                totals_line(cfg, &grand_total(&days))
            );
        }
    }

    Ok(())
}
