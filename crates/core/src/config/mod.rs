//! Plugin configuration persistence
//!
//! This module provides a trait-based configuration system that supports:
//! - Type-safe config structs via serde
//! - TOML file format
//! - Auto-generation of default configs
//! - Manual reload capability
//!
//! # Example
//!
//! ```ignore
//! use serde::{Deserialize, Serialize};
//! use insanekick_core::PluginConfig;
//!
//! #[derive(Default, Serialize, Deserialize)]
//! #[serde(default)]
//! pub struct MyPluginConfig {
//!     pub max_players: i32,
//!     pub welcome_message: String,
//! }
//!
//! impl PluginConfig for MyPluginConfig {
//!     const PLUGIN_NAME: &'static str = "my_plugin";
//! }
//!
//! fn load_config(host: &Host) {
//!     let config = MyPluginConfig::load(host.config_dir()).unwrap_or_default();
//!     println!("Max players: {}", config.max_players);
//! }
//! ```

mod loader;

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

pub use loader::{plugin_config_dir, plugin_config_path};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Trait for plugin configuration types.
///
/// Implement this trait on your config struct to enable automatic loading,
/// saving, and reloading of configuration files. Mark the struct
/// `#[serde(default)]` so that keys missing from the file fall back to
/// their defaults instead of failing the parse.
///
/// # File Location
///
/// Configs are stored at:
/// `{config_dir}/plugins/{PLUGIN_NAME}/{PLUGIN_NAME}.toml`
pub trait PluginConfig: Default + Serialize + DeserializeOwned + Send + Sync {
    /// The plugin name used for config file path resolution.
    const PLUGIN_NAME: &'static str;

    /// Full path of this config's file under `config_dir`
    fn path(config_dir: &Path) -> PathBuf {
        plugin_config_path(config_dir, Self::PLUGIN_NAME)
    }

    /// Load config from file, creating default if missing.
    ///
    /// If the config file doesn't exist, a default config is created and saved.
    fn load(config_dir: &Path) -> ConfigResult<Self> {
        let path = Self::path(config_dir);

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded config for {} from {:?}", Self::PLUGIN_NAME, path);
            Ok(config)
        } else {
            let default = Self::default();
            default.save(config_dir)?;
            tracing::info!("Created default config for {} at {:?}", Self::PLUGIN_NAME, path);
            Ok(default)
        }
    }

    /// Save config to file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self, config_dir: &Path) -> ConfigResult<()> {
        let path = Self::path(config_dir);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        tracing::debug!("Saved config for {} to {:?}", Self::PLUGIN_NAME, path);
        Ok(())
    }

    /// Reload config from file.
    ///
    /// Updates self with the current file contents. On error self is left
    /// untouched.
    fn reload(&mut self, config_dir: &Path) -> ConfigResult<()> {
        let path = Self::path(config_dir);
        let content = std::fs::read_to_string(&path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Reloaded config for {} from {:?}", Self::PLUGIN_NAME, path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct TestConfig {
        pub value: i32,
        pub name: String,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                value: 7,
                name: "default".to_string(),
            }
        }
    }

    impl PluginConfig for TestConfig {
        const PLUGIN_NAME: &'static str = "test_plugin";
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = TestConfig::load(dir.path()).unwrap();

        assert_eq!(config, TestConfig::default());
        assert!(dir.path().join("plugins/test_plugin/test_plugin.toml").exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = TestConfig {
            value: 42,
            name: "test".to_string(),
        };
        config.save(dir.path()).unwrap();

        assert_eq!(TestConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = TestConfig::path(dir.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "value = 3\n").unwrap();

        let config = TestConfig::load(dir.path()).unwrap();
        assert_eq!(config.value, 3);
        assert_eq!(config.name, "default");
    }

    #[test]
    fn test_reload_keeps_previous_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = TestConfig::load(dir.path()).unwrap();

        std::fs::write(TestConfig::path(dir.path()), "value = 11\n").unwrap();
        config.reload(dir.path()).unwrap();
        assert_eq!(config.value, 11);

        std::fs::write(TestConfig::path(dir.path()), "value = [").unwrap();
        let err = config.reload(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert_eq!(config.value, 11);
    }
}
