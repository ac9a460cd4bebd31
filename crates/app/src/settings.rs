//! Game configuration sources: built-in defaults, an optional TOML file,
//! then command-line overrides.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use dungeon_core::GameConfig;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub high_score_file: Option<PathBuf>,
    pub no_pause: bool,
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub fn parse_config(text: &str) -> Result<GameConfig> {
    toml::from_str(text).context("invalid game configuration")
}

pub fn load_config_file(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Failed to load config file: {}", path.display()))
}

/// An explicit path must load; the default path is only used if it exists.
pub fn resolve_config(
    explicit: Option<&Path>,
    default_path: Option<&Path>,
    overrides: &Overrides,
) -> Result<GameConfig> {
    let mut config = match (explicit, default_path) {
        (Some(path), _) => {
            info!("loading config from {}", path.display());
            load_config_file(path)?
        }
        (None, Some(path)) if path.exists() => {
            info!("loading config from {}", path.display());
            load_config_file(path)?
        }
        _ => {
            info!("using built-in config");
            GameConfig::default()
        }
    };

    if let Some(path) = &overrides.high_score_file {
        config.high_score_location = path.clone();
    }
    if overrides.no_pause {
        config.turn_pause_ms = 0;
    }
    config.validate().context("invalid game configuration")?;
    Ok(config)
}
