use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;
use std::path::{Path, PathBuf};

/// Resolve an output path given on the command line. `~/` is expanded and
/// the result must be absolute.
pub(crate) fn resolve_output(file: &str) -> AppResult<PathBuf> {
    let path = expand_tilde(file);
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {file}"
        )));
    }
    Ok(path)
}

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists otherwise → ask the user
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".into(),
        ))
    }
}
