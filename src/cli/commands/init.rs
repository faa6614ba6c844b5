use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing dailylog…");
    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", cfg.database));

    let store = SqliteStore::open(&cfg.database)?;
    audit(
        store.conn(),
        "init",
        "database",
        &format!("Database initialized at {}", cfg.database),
    );

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
