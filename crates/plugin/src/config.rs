//! Plugin configuration structure
//!
//! This module defines the TOML configuration file format.

use serde::{Deserialize, Serialize};

use insanekick_core::PluginConfig;

/// Kick message used when the config doesn't set one
pub const DEFAULT_KICK_MESSAGE: &str =
    "&c&lInsaneKick\n&7\n&fSorry, but you died,\n&fso you have been kicked.\n&7\n&ePlease reconnect!";

/// Plugin configuration loaded from TOML file.
///
/// Location: `{config_dir}/plugins/insanekick/insanekick.toml`
///
/// ```toml
/// enabled = true
/// debug-mode = false
/// kick-delay = 0
/// kick-message = "&c&lInsaneKick\n..."
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct KickConfig {
    /// Kick players when they die
    pub enabled: bool,

    /// Verbose logging
    pub debug_mode: bool,

    /// Seconds of countdown before the kick (0 kicks on the next frame)
    pub kick_delay: u32,

    /// Disconnect reason shown to the player, colour codes included
    pub kick_message: String,
}

impl Default for KickConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debug_mode: false,
            kick_delay: 0,
            kick_message: DEFAULT_KICK_MESSAGE.to_string(),
        }
    }
}

impl PluginConfig for KickConfig {
    const PLUGIN_NAME: &'static str = "insanekick";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_kebab_case() {
        let toml_str = toml::to_string_pretty(&KickConfig::default()).unwrap();
        assert!(toml_str.contains("enabled = true"));
        assert!(toml_str.contains("debug-mode = false"));
        assert!(toml_str.contains("kick-delay = 0"));
        assert!(toml_str.contains("kick-message"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: KickConfig = toml::from_str("kick-delay = 5\n").unwrap();
        assert_eq!(config.kick_delay, 5);
        assert!(config.enabled);
        assert!(!config.debug_mode);
        assert_eq!(config.kick_message, DEFAULT_KICK_MESSAGE);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: KickConfig = toml::from_str("").unwrap();
        assert_eq!(config, KickConfig::default());
    }

    #[test]
    fn test_negative_delay_is_rejected() {
        assert!(toml::from_str::<KickConfig>("kick-delay = -1\n").is_err());
    }
}
