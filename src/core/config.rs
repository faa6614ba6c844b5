use crate::config::Config;
use crate::config::migrate::fill_missing_fields;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// The effective configuration as YAML.
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    /// Editor to use: `--editor`, then `$EDITOR`, then `$VISUAL`, then a
    /// platform default.
    pub fn pick_editor(requested: Option<&str>) -> String {
        requested
            .map(str::to_string)
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `dailylog init` first",
                path.display()
            )));
        }

        let ed = Self::pick_editor(editor);
        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{ed}': {e}")))?;

        if status.success() {
            success(format!("Configuration file edited using '{ed}'"));
            Ok(())
        } else {
            Err(AppError::Config(format!("editor '{ed}' exited with {status}")))
        }
    }

    /// Add missing keys to the configuration file.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            warning(format!("No configuration file at {}", path.display()));
            return Ok(Vec::new());
        }

        let added = fill_missing_fields(path)?;
        if added.is_empty() {
            success("Configuration file is complete.");
        } else {
            for key in &added {
                info(format!("Added missing field '{key}' with its default value"));
            }
        }
        Ok(added)
    }
}
