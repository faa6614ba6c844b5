use crate::core::calendar::WeekStart;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

/// Display name and unit of one of the four values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureLabel {
    pub name: String,
    #[serde(default)]
    pub unit: String,
}

impl MeasureLabel {
    fn new(name: &str, unit: &str) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
        }
    }

    /// `Water (cups)`, or just the name when there is no unit.
    pub fn heading(&self) -> String {
        if self.unit.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.unit)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_labels")]
    pub labels: [MeasureLabel; 4],
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

pub(crate) fn default_labels() -> [MeasureLabel; 4] {
    [
        MeasureLabel::new("Urine", "cups"),
        MeasureLabel::new("Stoma", "cups"),
        MeasureLabel::new("Water", "cups"),
        MeasureLabel::new("Walking", "min"),
    ]
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            labels: default_labels(),
            week_start: WeekStart::default(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dailylog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".dailylog")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dailylog.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("dailylog.sqlite")
    }

    /// Load the configuration file, or defaults when it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// One-line label for value `idx` (0-based), e.g. `Water (cups)`.
    pub fn heading(&self, idx: usize) -> String {
        self.labels
            .get(idx)
            .map(MeasureLabel::heading)
            .unwrap_or_else(|| format!("value{}", idx + 1))
    }

    /// Resolve the database path for `init`. A relative name is placed in
    /// the configuration directory.
    pub fn resolve_db_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() {
                    p
                } else {
                    Self::config_dir().join(p)
                }
            }
            None => Self::database_file(),
        }
    }

    /// Create the configuration file (skipped in test mode) and return the
    /// configuration pointing at the chosen database.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Config> {
        let db_path = Self::resolve_db_path(custom_db);

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let dir = Self::config_dir();
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("dailylog_cfg_{}_{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = scratch("missing");
        let cfg = Config::load_from(&dir.join("none.conf")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.heading(3), "Walking (min)");
    }

    #[test]
    fn partial_file_is_completed_with_defaults() {
        let dir = scratch("partial");
        let path = dir.join("dailylog.conf");
        fs::write(&path, "database: /tmp/x.sqlite\nweek_start: sunday\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.week_start, WeekStart::Sunday);
        assert_eq!(cfg.labels, default_labels());
        assert_eq!(cfg.separator_char, "-");
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let dir = scratch("bad");
        let path = dir.join("dailylog.conf");
        fs::write(&path, "week_start: [not, a, day]\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn relative_db_name_goes_to_config_dir() {
        let p = Config::resolve_db_path(Some("other.sqlite"));
        assert_eq!(p, Config::config_dir().join("other.sqlite"));
        assert_eq!(
            Config::resolve_db_path(Some("/abs/db.sqlite")),
            PathBuf::from("/abs/db.sqlite")
        );
    }
}
