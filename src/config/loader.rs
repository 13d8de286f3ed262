// Configuration loader
// Reads ~/.carebot/config.toml (or an explicit path), falling back to defaults

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;
use crate::errors::config_parse_error;

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "CAREBOT_CONFIG";

/// Default config location: ~/.carebot/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".carebot").join("config.toml"))
}

/// Load configuration.
///
/// An explicit path (flag or `CAREBOT_CONFIG`) must exist; the default
/// location is optional and missing means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let from_env = std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);

    if let Some(path) = explicit.map(Path::to_path_buf).or(from_env) {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        return load_from_path(&path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Parse a TOML config file
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config = parse_config(&contents)
        .with_context(|| format!("Invalid config in {}", path.display()))?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse TOML text; omitted fields take their defaults
pub fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => bail!(config_parse_error(&e.to_string())),
    };
    Ok(config)
}
