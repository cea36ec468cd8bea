//! InsaneKick Engine - Host Game Server Interface
//!
//! This crate handles:
//! - The [`GameServer`] trait the host implements for player, world and
//!   network operations
//! - The [`EngineHandle`] shared by the framework and plugins
//! - Error reporting for host operations
//!
//! # Architecture
//!
//! The host embeds the plugin framework and passes its `GameServer`
//! implementation in once via [`EngineHandle::new`]. Every subsystem that
//! needs to talk to players clones the handle. All calls are expected on
//! the host's frame thread.

pub mod error;
pub mod handle;
pub mod server;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::HostError;
pub use handle::EngineHandle;
pub use server::GameServer;
