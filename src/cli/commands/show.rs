use crate::cli::commands::entries_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{EntryStore, SqliteStore};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::time::format_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = SqliteStore::open(&cfg.database)?;
        let entry = store.get_one(*id)?;

        header(format!("Entry #{} · {}", entry.id, entry.date_str()));
        println!("Recorded at {}\n", format_timestamp(&entry.timestamp));
        print!("{}", entries_table(cfg, std::slice::from_ref(&entry)).render());
    }

    Ok(())
}
