// SPDX-License-Identifier: MPL-2.0
//! Notification defaults loaded from a `notifications.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_notify::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.placement = Some("left-bottom".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::{Error, Result};
use crate::notifications::{Defaults, Placement};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::{
    DEFAULT_AUTO_CLOSE, DEFAULT_CLOSABLE, DEFAULT_DURATION_MS, DEFAULT_EXIT_DELAY_MS,
    DEFAULT_PLACEMENT, DEFAULT_VERTICAL_OFFSET, MAX_DURATION_MS, MAX_EXIT_DELAY_MS,
    TICK_INTERVAL_MS,
};

const CONFIG_FILE: &str = "notifications.toml";
const APP_NAME: &str = "IcedNotify";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub placement: Option<String>,
    #[serde(default)]
    pub closable: Option<bool>,
    #[serde(default)]
    pub auto_close: Option<bool>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub vertical_offset: Option<i32>,
    #[serde(default)]
    pub exit_delay_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placement: Some(DEFAULT_PLACEMENT.to_string()),
            closable: Some(DEFAULT_CLOSABLE),
            auto_close: Some(DEFAULT_AUTO_CLOSE),
            duration_ms: Some(DEFAULT_DURATION_MS),
            vertical_offset: Some(DEFAULT_VERTICAL_OFFSET),
            exit_delay_ms: Some(DEFAULT_EXIT_DELAY_MS),
        }
    }
}

impl Config {
    /// Converts the file values into manager defaults.
    ///
    /// Unknown placements fall back to right-top and durations are clamped
    /// to their maximum; see [`Config::issues`] for what was rejected.
    #[must_use]
    pub fn defaults(&self) -> Defaults {
        let placement = self
            .placement
            .as_deref()
            .and_then(|key| key.parse::<Placement>().ok())
            .unwrap_or_default();

        Defaults {
            placement,
            closable: self.closable.unwrap_or(DEFAULT_CLOSABLE),
            duration: Duration::from_millis(
                self.duration_ms
                    .unwrap_or(DEFAULT_DURATION_MS)
                    .min(MAX_DURATION_MS),
            ),
            auto_close: self.auto_close.unwrap_or(DEFAULT_AUTO_CLOSE),
            vertical_offset: self.vertical_offset.unwrap_or(DEFAULT_VERTICAL_OFFSET),
            exit_delay: Duration::from_millis(
                self.exit_delay_ms
                    .unwrap_or(DEFAULT_EXIT_DELAY_MS)
                    .min(MAX_EXIT_DELAY_MS),
            ),
        }
    }

    /// Values that [`Config::defaults`] had to replace.
    #[must_use]
    pub fn issues(&self) -> Vec<Error> {
        let mut issues = Vec::new();
        if let Some(key) = self.placement.as_deref() {
            if let Err(err) = key.parse::<Placement>() {
                issues.push(err);
            }
        }
        if self.duration_ms.is_some_and(|ms| ms > MAX_DURATION_MS) {
            issues.push(Error::Config(format!(
                "duration_ms exceeds {MAX_DURATION_MS}"
            )));
        }
        if self.exit_delay_ms.is_some_and(|ms| ms > MAX_EXIT_DELAY_MS) {
            issues.push(Error::Config(format!(
                "exit_delay_ms exceeds {MAX_EXIT_DELAY_MS}"
            )));
        }
        issues
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Invalid TOML yields the default config.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let config = Config {
            placement: Some("center".to_string()),
            duration_ms: Some(1500),
            auto_close: Some(false),
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("notifications.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("notifications.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn partial_file_leaves_other_fields_unset() {
        let config: Config = toml::from_str("duration_ms = 100").unwrap();
        assert_eq!(config.duration_ms, Some(100));
        assert!(config.placement.is_none());

        let defaults = config.defaults();
        assert_eq!(defaults.duration, Duration::from_millis(100));
        assert_eq!(defaults.placement, Placement::RightTop);
        assert!(defaults.closable);
    }

    #[test]
    fn default_config_matches_manager_defaults() {
        assert_eq!(Config::default().defaults(), Defaults::default());
        assert!(Config::default().issues().is_empty());
    }

    #[test]
    fn invalid_placement_falls_back_and_is_reported() {
        let config = Config {
            placement: Some("bottom-center".to_string()),
            ..Config::default()
        };
        assert_eq!(config.defaults().placement, Placement::RightTop);
        assert_eq!(
            config.issues(),
            vec![Error::Placement("bottom-center".to_string())]
        );
    }

    #[test]
    fn oversized_durations_are_clamped() {
        let config = Config {
            duration_ms: Some(MAX_DURATION_MS + 1),
            exit_delay_ms: Some(MAX_EXIT_DELAY_MS + 1),
            ..Config::default()
        };
        let defaults = config.defaults();
        assert_eq!(defaults.duration, Duration::from_millis(MAX_DURATION_MS));
        assert_eq!(defaults.exit_delay, Duration::from_millis(MAX_EXIT_DELAY_MS));
        assert_eq!(config.issues().len(), 2);
    }
}
