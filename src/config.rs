//! Configuration loader plus strongly typed settings
//!
//! Deserializes the config TOML, seeds the platform config directory with
//! the embedded default on first run, and exposes helpers for resolving the
//! data directory (overridable via the WIDGET_PLAYGROUND_DIR environment
//! variable).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embedded default configuration, written out on first run
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long one event-loop iteration waits for input, in milliseconds
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,

    /// Slider increment per arrow-key press
    #[serde(default = "default_slider_step")]
    pub slider_step: f32,

    /// Whether to render the status bar
    #[serde(default = "default_status_bar")]
    pub status_bar: bool,
}

fn default_poll_timeout_ms() -> u64 {
    16
}

fn default_slider_step() -> f32 {
    0.05
}

fn default_status_bar() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            slider_step: default_slider_step(),
            status_bar: default_status_bar(),
        }
    }
}

impl Config {
    /// Base directory for configuration
    ///
    /// WIDGET_PLAYGROUND_DIR overrides the platform config dir.
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("WIDGET_PLAYGROUND_DIR") {
            return Ok(PathBuf::from(dir));
        }
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("widget-playground"))
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Load from the default location, seeding it with the embedded default
    /// on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }
            fs::write(&path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write default config to {:?}", path))?;
            tracing::info!("Wrote default config to {:?}", path);
        }
        Self::load_from_path(&path)
    }

    /// Load from an explicit path; a missing or malformed file is an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        tracing::debug!("Config loaded from {:?}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.ui.poll_timeout_ms, 16);
        assert_eq!(config.ui.slider_step, 0.05);
        assert!(config.ui.status_bar);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("[ui]\npoll_timeout_ms = 33\n").unwrap();
        assert_eq!(config.ui.poll_timeout_ms, 33);
        assert_eq!(config.ui.slider_step, 0.05);
        assert!(config.ui.status_bar);
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.poll_timeout_ms, 16);
    }

    #[test]
    fn test_config_round_trips() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.ui.poll_timeout_ms, config.ui.poll_timeout_ms);
        assert_eq!(parsed.ui.slider_step, config.ui.slider_step);
        assert_eq!(parsed.ui.status_bar, config.ui.status_bar);
    }
}
