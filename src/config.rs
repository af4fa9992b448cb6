use crate::error::{Result, SeverityError};
use crate::types::config::SeverityConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "breach-severity.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".breach-severity/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/breach-severity/config.toml";

/// Loads `explicit` alone when given, otherwise merges the global, working
/// directory and local files in that order. Missing files are skipped.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<SeverityConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(SeverityError::ConfigNotFound(path.display().to_string()));
        }
        let cfg = parse_config(read_toml_value(path)?)?;
        cfg.validate()?;
        return Ok(cfg);
    }

    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(cwd, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<SeverityConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg = parse_config(merged)?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(SeverityError::ConfigExists(path.display().to_string()));
    }
    let content = toml::to_string_pretty(&SeverityConfig::default())?;
    std::fs::write(path, content)?;
    Ok(())
}

fn parse_config(value: Value) -> Result<SeverityConfig> {
    value
        .try_into()
        .map_err(|e: toml::de::Error| SeverityError::ConfigParse(e.to_string()))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SeverityError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
