//! InsaneKick framework core
//!
//! The pieces of the host runtime a plugin talks to: a clock, a
//! frame-driven timer registry, an event bus, console and chat commands,
//! a permission registry and TOML config persistence, bundled in [`Host`].
//!
//! # Re-exports
//!
//! This crate re-exports the SDK and engine crates for convenience:
//! - [`sdk`] - Plain host data types
//! - [`engine`] - The `GameServer` trait and `EngineHandle`

pub use insanekick_engine as engine;
pub use insanekick_sdk as sdk;

pub mod clock;
pub mod commands;
pub mod config;
pub mod events;
mod host;
pub mod permissions;
mod plugin;
pub mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use commands::{ChatDispatch, CommandContext, CommandInfo, CommandKey, CommandManager, CommandResult};
pub use config::{ConfigError, ConfigResult, PluginConfig};
pub use events::{EventInfo, EventKey, EventManager, GameEvent, HookResult, RawEvent};
pub use host::Host;
pub use permissions::PermissionRegistry;
pub use plugin::{Plugin, PluginError};
pub use timers::{TimerAction, TimerFlags, TimerKey, Timers};
