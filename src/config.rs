use crate::error::{ProfileError, Result};
use crate::types::config::ScorerConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "profile-score.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".profile-score/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/profile-score/config.toml";

pub fn load_config(root: &Path) -> Result<ScorerConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<ScorerConfig> {
    let mut merged = Value::Table(Map::new());
    let mut layers = Vec::new();
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, &mut layers, path)?;
    }
    merge_file_if_exists(&mut merged, &mut layers, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &mut layers, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: ScorerConfig = merged.try_into().map_err(|e: toml::de::Error| {
        let sources = layers
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        ProfileError::ConfigParse(format!("{sources}: {e}"))
    })?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(
    merged: &mut Value,
    layers: &mut Vec<PathBuf>,
    path: &Path,
) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    layers.push(path.to_path_buf());
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ProfileError::ConfigParse(format!("{}: {}", path.display(), e)))
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
