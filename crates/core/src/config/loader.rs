//! Config path resolution
//!
//! The host hands every plugin the same config root; each plugin gets its
//! own directory beneath it.

use std::path::{Path, PathBuf};

/// Returns the directory holding a plugin's config files.
///
/// Path: `{config_dir}/plugins/{plugin_name}/`
pub fn plugin_config_dir(config_dir: &Path, plugin_name: &str) -> PathBuf {
    config_dir.join("plugins").join(plugin_name)
}

/// Returns the path for a plugin's config file.
///
/// Path: `{config_dir}/plugins/{plugin_name}/{plugin_name}.toml`
pub fn plugin_config_path(config_dir: &Path, plugin_name: &str) -> PathBuf {
    plugin_config_dir(config_dir, plugin_name).join(format!("{}.toml", plugin_name))
}
