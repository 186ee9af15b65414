use super::keymap::KeyConfig;
use crate::domain::profile::Profile;
use crate::infrastructure::song_api::DEFAULT_ENDPOINT;
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NowPlayingConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub interval_secs: u64,
}

impl Default for NowPlayingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval_secs: 30,
        }
    }
}

impl NowPlayingConfig {
    /// Poll period, never shorter than one second.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: PaletteType,
    pub keys: KeyConfig,
    pub profile: Profile,
    /// TOML CV document. The built-in CV is used when unset.
    pub cv_path: Option<PathBuf>,
    pub now_playing: NowPlayingConfig,
}

pub fn get_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("folio");
        path
    })
}

pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Loads `~/.config/folio/config.toml`. A missing file gives the defaults; a
/// broken one gives the defaults and a warning in the log.
pub fn load_config() -> AppConfig {
    let Some(path) = get_config_path() else {
        return AppConfig::default();
    };
    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return AppConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("{e:#}; using defaults");
            AppConfig::default()
        }
    }
}
