//! Bring an existing configuration file up to date with the current fields.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Add every top-level key that is missing from the YAML file at `path`,
/// using its default value. Existing keys are left untouched, unknown keys
/// are kept. Returns the names of the keys that were added.
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let mut yaml: Value = if content.trim().is_empty() {
        Value::Mapping(Mapping::new())
    } else {
        serde_yaml::from_str(&content)?
    };

    let map = yaml.as_mapping_mut().ok_or_else(|| {
        AppError::Config(format!("{} is not a YAML mapping", path.display()))
    })?;

    let defaults = serde_yaml::to_value(Config::default())?;
    let mut added = Vec::new();

    if let Some(default_map) = defaults.as_mapping() {
        for (key, value) in default_map {
            if !map.contains_key(key) {
                map.insert(key.clone(), value.clone());
                if let Some(k) = key.as_str() {
                    added.push(k.to_string());
                }
            }
        }
    }

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&yaml)?)?;
    }

    Ok(added)
}
