use anyhow::{Context, Result};
use log::debug;
use relocale_core::Locale;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Config file picked up from the corpus root when `--config` is not given.
pub const CONFIG_FILE: &str = "relocale.toml";

/// Settings read from `relocale.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub locale: Locale,
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            skip_dirs: vec!["vendor".to_string(), "node_modules".to_string()],
        }
    }
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load `explicit` if given, else `relocale.toml` under `root`, else defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = root.join(CONFIG_FILE);
                if !path.is_file() {
                    debug!("No {CONFIG_FILE} in {}, using defaults", root.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        debug!("Loading config from {}", path.display());
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&source).with_context(|| format!("Invalid config {}", path.display()))
    }
}
