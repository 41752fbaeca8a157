use super::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const EXPECTED_KEYS: [&str; 5] = [
    "database",
    "currency",
    "tick_interval_ms",
    "default_break",
    "separator_char",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    Ok(yaml.as_mapping().cloned().unwrap_or_default())
}

/// Return the expected keys that are missing from the YAML file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Fill missing keys with their defaults, keeping every existing value.
///   Returns:
///   Ok(true)  → file rewritten
///   Ok(false) → nothing to add
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        info("Configuration is up to date.");
        return Ok(false);
    }

    let mut map = read_mapping(path)?;
    let defaults = serde_yaml::to_value(Config::default())?;

    if let Some(default_map) = defaults.as_mapping() {
        for key in &missing {
            let k = Value::String((*key).to_string());
            if let Some(v) = default_map.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
    success(format!(
        "Configuration migrated, added: {}",
        missing.join(", ")
    ));
    Ok(true)
}
