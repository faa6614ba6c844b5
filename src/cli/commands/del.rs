use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::SqliteStore;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes && !confirm(&format!("Delete entry #{id}? This action is irreversible.")) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = SqliteStore::open(&cfg.database)?;
        if DeleteLogic::apply(&mut store, *id)? {
            audit(store.conn(), "del", &id.to_string(), "Entry deleted");
            success(format!("Entry #{id} has been deleted."));
        } else {
            info(format!("Entry #{id} does not exist, nothing to delete."));
        }
    }

    Ok(())
}
