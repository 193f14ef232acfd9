// src/config/io.rs
use super::types::{BrandcheckToml, Config, EngineConfig, Preferences};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "brandcheck.toml";

/// Reads `brandcheck.toml` from `dir` if present. A malformed file is logged
/// and ignored so a typo never blocks a check.
pub fn load_toml_config(config: &mut Config, dir: &Path) {
    let path = dir.join(CONFIG_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return;
    };
    parse_toml(config, &content);
}

pub fn parse_toml(config: &mut Config, content: &str) {
    match toml::from_str::<BrandcheckToml>(content) {
        Ok(parsed) => {
            config.engine = parsed.engine;
            config.preferences = parsed.preferences;
        }
        Err(e) => {
            tracing::warn!("ignoring malformed {CONFIG_FILE}: {e}");
        }
    }
}

/// Writes the given settings to `dir/brandcheck.toml`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to_file(engine: &EngineConfig, prefs: &Preferences, dir: &Path) -> Result<()> {
    let doc = BrandcheckToml {
        engine: engine.clone(),
        preferences: prefs.clone(),
    };
    let body = toml::to_string_pretty(&doc).context("Failed to serialize config")?;
    let path = dir.join(CONFIG_FILE);
    fs::write(&path, body).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
