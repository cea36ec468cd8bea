//! Plugin lifecycle

use crate::config::ConfigError;
use crate::host::Host;

/// Errors a plugin can report while loading
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("plugin '{0}' is already loaded")]
    AlreadyLoaded(String),
}

/// A plugin driven by the host
///
/// `load` registers handlers, commands and timers against the host;
/// `unload` must remove everything `load` registered.
pub trait Plugin: Send {
    /// Plugin name, also used for its config directory
    fn name(&self) -> &str;

    fn load(&mut self, host: &Host) -> Result<(), PluginError>;

    fn unload(&mut self, host: &Host);
}
