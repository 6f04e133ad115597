//! Configuration file checks: find keys missing from an older file and
//! rewrite it with defaults filled in.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every current configuration file carries.
pub const EXPECTED_KEYS: [&str; 4] = [
    "database",
    "default_duration_seconds",
    "progress_bar_width",
    "show_progress_bar",
];

/// Keys absent from the YAML file at `path`. A missing file has no missing keys.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config(format!("{} is not a YAML mapping", path.display())))?;

    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Rewrite the file with defaults for every missing key.
/// Returns `true` when the file was changed.
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    // `database` has no serde default: fall back to the standard location.
    let cfg = if missing.contains(&"database") {
        let content = fs::read_to_string(path)?;
        let mut yaml: Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        if let Some(map) = yaml.as_mapping_mut() {
            map.insert(
                Value::String("database".to_string()),
                Value::String(Config::default().database),
            );
        }
        serde_yaml::from_value::<Config>(yaml).map_err(|e| AppError::Config(e.to_string()))?
    } else {
        Config::load_from(path)?
    };

    cfg.save_to(path)?;
    success(format!("Added missing configuration keys: {}", missing.join(", ")));
    Ok(true)
}
