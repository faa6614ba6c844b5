use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;
        let (path, count) = ExportLogic::export(&store, *format, file, range.as_deref(), *force)?;

        audit(
            store.conn(),
            "export",
            &path.to_string_lossy(),
            &format!("{count} entries exported as {}", format.as_str()),
        );
    }
    Ok(())
}
