//! TOML-backed configuration for csstight: every combiner family and
//! selector rewrite is an independent toggle, all on by default. A missing
//! config file means defaults, not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use csstight_engine::Options;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Border/outline color+style+width combination.
    pub csw_combine: bool,
    /// Aural cue/pause combination.
    pub auralcp_combine: bool,
    /// Directional margin/padding combination.
    pub mp_combine: bool,
    /// Border edge unification.
    pub border_combine: bool,
    /// Font shorthand assembly.
    pub font_combine: bool,
    /// Background shorthand assembly.
    pub background_combine: bool,
    /// List-style shorthand assembly.
    pub list_combine: bool,
    /// Lowercase bare element names in selectors.
    pub lowercase_selectors: bool,
    /// Space after :first-letter/:first-line for old IE.
    pub pseudo_space: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csw_combine: true,
            auralcp_combine: true,
            mp_combine: true,
            border_combine: true,
            font_combine: true,
            background_combine: true,
            list_combine: true,
            lowercase_selectors: true,
            pseudo_space: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/csstight");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Engine options for this configuration.
    pub fn options(&self) -> Options {
        Options {
            csw_combine: self.csw_combine,
            auralcp_combine: self.auralcp_combine,
            mp_combine: self.mp_combine,
            border_combine: self.border_combine,
            font_combine: self.font_combine,
            background_combine: self.background_combine,
            list_combine: self.list_combine,
            lowercase_selectors: self.lowercase_selectors,
            pseudo_space: self.pseudo_space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/csstight/config.toml"));
    }

    #[test]
    fn test_defaults_enable_everything() {
        let config = Config::default();
        let options = config.options();
        assert!(options.csw_combine);
        assert!(options.list_combine);
        assert!(options.pseudo_space);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut original = Config::default();
        original.font_combine = false;

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert!(!deserialized.font_combine);
        assert!(deserialized.csw_combine);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("mp_combine = false").unwrap();
        assert!(!config.mp_combine);
        assert!(config.border_combine);
        assert!(config.lowercase_selectors);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let mut test_config = Config::default();
        test_config.background_combine = false;

        test_config.save_to_path(&config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert!(!loaded_config.background_combine);
        assert!(loaded_config.csw_combine);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "csw_combine = \"not a bool\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }
}
