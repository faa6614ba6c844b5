use crate::cli::commands::measures_from_args;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::SqliteStore;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::{parse_date_arg, today};
use crate::utils::time::parse_optional_time;

/// Record a new entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, time, values } = cmd {
        let d = match date {
            Some(s) => parse_date_arg(s)?,
            None => today(),
        };
        let t = parse_optional_time(time.as_ref())?;
        let measures = measures_from_args(values)?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let id = AddLogic::submit(&mut store, d, t, measures)?;

        audit(store.conn(), "add", &id.to_string(), &format!("Entry added for {d}"));
        success(format!("Entry #{id} added for {d}."));
    }

    Ok(())
}
