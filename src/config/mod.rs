// SPDX-License-Identifier: MPL-2.0
//! This module handles the tool's configuration, loaded from a
//! `settings.toml` file in the user's configuration directory.
//!
//! Every field is optional; missing fields fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use exif_probe::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.desired_tags = Some(vec!["DateTime".into(), "Orientation".into()]);
//!
//! let path = std::env::temp_dir().join("exif_probe_settings.toml");
//! config::save_to_path(&config, &path)?;
//! let loaded = config::load_from_path(&path)?;
//! assert_eq!(loaded.desired_tags(), vec!["DateTime", "Orientation"]);
//! # Ok::<(), exif_probe::Error>(())
//! ```

pub mod defaults;

use crate::error::Result;
use crate::infrastructure::http::HttpSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use defaults::{
    DEFAULT_DESIRED_TAGS, DEFAULT_LOCATOR, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "exif_probe";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub desired_tags: Option<Vec<String>>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub max_redirects: Option<usize>,
}

impl Config {
    /// Tags to extract, falling back to [`DEFAULT_DESIRED_TAGS`].
    #[must_use]
    pub fn desired_tags(&self) -> Vec<String> {
        self.desired_tags.clone().unwrap_or_else(|| {
            DEFAULT_DESIRED_TAGS
                .iter()
                .map(|t| (*t).to_string())
                .collect()
        })
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .or(DEFAULT_TIMEOUT_SECS)
            .map(Duration::from_secs)
    }

    #[must_use]
    pub fn max_redirects(&self) -> usize {
        self.max_redirects.unwrap_or(DEFAULT_MAX_REDIRECTS)
    }

    /// HTTP client settings derived from this configuration.
    #[must_use]
    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            user_agent: self.user_agent().to_string(),
            timeout: self.timeout(),
            max_redirects: self.max_redirects(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the settings file from the default location, or defaults if absent.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Loads settings from `path`. Invalid TOML yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), "Ignoring invalid settings file: {err}");
            Ok(Config::default())
        }
    }
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
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            desired_tags: Some(vec!["DateTime".into(), "GPSInfo".into()]),
            user_agent: Some("probe-test".into()),
            timeout_secs: Some(15),
            max_redirects: Some(2),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "timeout_secs = 30\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(loaded.desired_tags(), vec!["DateTime"]);
        assert_eq!(loaded.max_redirects(), DEFAULT_MAX_REDIRECTS);
    }

    #[test]
    fn default_config_has_no_timeout() {
        let config = Config::default();
        assert_eq!(config.timeout(), None);
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert!(config.user_agent().starts_with("exif_probe/"));
    }

    #[test]
    fn http_settings_follow_config() {
        let config = Config {
            user_agent: Some("ua".into()),
            timeout_secs: Some(3),
            max_redirects: Some(0),
            ..Config::default()
        };
        let settings = config.http_settings();
        assert_eq!(settings.user_agent, "ua");
        assert_eq!(settings.timeout, Some(Duration::from_secs(3)));
        assert_eq!(settings.max_redirects, 0);
    }
}
