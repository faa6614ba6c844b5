use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::db::SqliteStore;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let mut store = SqliteStore::open(&cfg.database)?;
        let report = ImportLogic::import(&mut store, &path)?;

        if report.skipped > 0 {
            info(format!("{} row(s) without values skipped.", report.skipped));
        }
        success(format!(
            "Imported {} entr{} from {}",
            report.imported,
            if report.imported == 1 { "y" } else { "ies" },
            path.display()
        ));

        audit(
            store.conn(),
            "import",
            &path.to_string_lossy(),
            &format!("{} imported, {} skipped", report.imported, report.skipped),
        );
    }
    Ok(())
}
