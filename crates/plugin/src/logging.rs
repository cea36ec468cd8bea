//! Log output and runtime verbosity
//!
//! Installs a `tracing` subscriber whose filter sits behind a reload layer,
//! so the debug toggle can switch between `info` and `debug` without a
//! restart.

use std::sync::OnceLock;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, Registry};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Handle to the subscriber installed by the first load, shared by later loads
static INSTALLED: OnceLock<LogHandle> = OnceLock::new();

/// Switches the plugin's log level at runtime
///
/// Inert when another subscriber was already installed.
#[derive(Clone, Default)]
pub struct LogHandle {
    filter: Option<FilterHandle>,
}

fn level(debug_mode: bool) -> LevelFilter {
    if debug_mode {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// `RUST_LOG` directives on top of a `debug` or `info` default
fn env_filter(debug_mode: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level(debug_mode).into())
        .from_env_lossy()
}

fn install(debug_mode: bool) -> LogHandle {
    let (filter, handle) = reload::Layer::new(env_filter(debug_mode));

    match tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
    {
        Ok(()) => LogHandle { filter: Some(handle) },
        Err(e) => {
            tracing::debug!("Keeping existing log subscriber: {}", e);
            LogHandle::default()
        }
    }
}

/// Install the global subscriber, or reuse the one from an earlier load
///
/// `RUST_LOG` is honoured; the level falls back to `debug` or `info`
/// depending on `debug_mode`.
pub fn init(debug_mode: bool) -> LogHandle {
    let mut fresh = false;
    let handle = INSTALLED
        .get_or_init(|| {
            fresh = true;
            install(debug_mode)
        })
        .clone();

    if !fresh {
        handle.set_debug(debug_mode);
    }
    handle
}

impl LogHandle {
    /// Whether this handle controls the installed subscriber
    pub fn is_active(&self) -> bool {
        self.filter.is_some()
    }

    /// Switch between `debug` and `info`
    pub fn set_debug(&self, debug_mode: bool) {
        let Some(handle) = &self.filter else {
            return;
        };

        match handle.reload(env_filter(debug_mode)) {
            Ok(()) => tracing::info!("Log level set to {}", level(debug_mode)),
            Err(e) => tracing::warn!("Failed to change log level: {}", e),
        }
    }
}

impl std::fmt::Debug for LogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogHandle").field("active", &self.is_active()).finish()
    }
}
