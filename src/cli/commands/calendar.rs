use crate::cli::commands::totals_line;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarMonth, build_month};
use crate::core::summary::summarize;
use crate::db::{EntryStore, SqliteStore};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{BOLD, GREEN, GREY, RESET, REVERSE};
use crate::utils::date::{first_of_month, last_of_month, month_name, parse_month, today};
use chrono::{Datelike, NaiveDate};

/// Month grid; days with entries are highlighted, today is reversed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month } = cmd {
        let now = today();
        let (year, m) = match month {
            Some(s) => parse_month(s)?,
            None => (now.year(), now.month()),
        };

        let store = SqliteStore::open(&cfg.database)?;
        let entries = store.get_in_range(first_of_month(year, m)?, last_of_month(year, m)?)?;
        let days = summarize(&entries, None);
        let cal = build_month(year, m, &days, cfg.week_start)?;

        header(format!("{} {}", month_name(m), year));
        println!("{}", render_grid(&cal, now));

        if days.is_empty() {
            info("No entries this month.");
            return Ok(());
        }

        for d in &days {
            println!(
                "{BOLD}{}{RESET}  {}",
                d.date.format("%d %a"),
                totals_line(cfg, &d.totals)
            );
        }
    }

    Ok(())
}

/// Plain-text grid, three columns per day.
fn render_grid(cal: &CalendarMonth, today: NaiveDate) -> String {
    let mut out = String::new();
    let labels: Vec<String> = cal
        .week_start
        .day_labels()
        .iter()
        .map(|l| format!("{l:>3}"))
        .collect();
    out.push_str(&format!("{GREY}{}{RESET}\n", labels.join(" ")));

    for week in &cal.weeks {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                None => "   ".to_string(),
                Some(day) => {
                    let n = format!("{:>3}", day.date.day());
                    let style = match (day.date == today, day.has_entries()) {
                        (true, _) => REVERSE,
                        (false, true) => GREEN,
                        (false, false) => "",
                    };
                    let mark = if day.has_entries() { BOLD } else { "" };
                    if style.is_empty() {
                        n
                    } else {
                        format!("{style}{mark}{n}{RESET}")
                    }
                }
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calendar::WeekStart;

    #[test]
    fn grid_has_header_and_week_rows() {
        let cal = build_month(2024, 2, &[], WeekStart::Monday).unwrap();
        let out = render_grid(&cal, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "              1   2   3   4");
        assert!(lines[5].ends_with(" 29"));
    }
}
