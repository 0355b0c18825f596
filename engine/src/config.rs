//! User configuration loaded from `~/.eperf/config.toml`.

use std::path::PathBuf;
use std::{fs, io};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
pub struct PerfConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for borders and icons.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl PerfConfig {
    /// Location of the config file, if a home directory can be determined.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".eperf").join("config.toml"))
    }

    /// Load the config file. A missing file is `Ok(None)`; unreadable or
    /// malformed files are errors so typos don't silently revert to defaults.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
        Ok(Some(config))
    }
}

/// UI options derived from config.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}

impl UiOptions {
    #[must_use]
    pub fn from_config(config: Option<&PerfConfig>) -> Self {
        let app = config.and_then(|cfg| cfg.app.as_ref());
        Self {
            ascii_only: app.is_some_and(|app| app.ascii_only),
            high_contrast: app.is_some_and(|app| app.high_contrast),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_off_without_config() {
        let options = UiOptions::from_config(None);
        assert!(!options.ascii_only);
        assert!(!options.high_contrast);
    }

    #[test]
    fn options_follow_app_section() {
        let config: PerfConfig = toml::from_str(
            r"
            [app]
            ascii_only = true
            high_contrast = true
            ",
        )
        .unwrap();
        let options = UiOptions::from_config(Some(&config));
        assert!(options.ascii_only);
        assert!(options.high_contrast);
    }

    #[test]
    fn empty_config_parses() {
        let config: PerfConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
    }
}
