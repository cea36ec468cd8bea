//! Game Event System
//!
//! Subscribe to and handle host game events (player_death, player_quit, etc.)
//!
//! # Architecture
//!
//! ```text
//! Host → EventManager::fire → pre hooks → (host default handling) → post hooks
//! ```
//!
//! # Example
//!
//! ```ignore
//! use insanekick_core::events::{HookResult, RawEvent};
//!
//! // Register a handler for player_death events
//! host.events().register_event("player_death", false, |event, _info| {
//!     let message = event.get_string_opt("message").unwrap_or_default();
//!     tracing::info!("Death: {}", message);
//!     HookResult::Continue
//! });
//!
//! // Or use typed events for better ergonomics:
//! use insanekick_core::events::EventPlayerDeath;
//!
//! host.events().register_typed::<EventPlayerDeath, _>(false, |event, _info| {
//!     tracing::info!("{} died", event.userid);
//!     HookResult::Continue
//! });
//! ```

mod manager;
mod raw;
pub mod typed;
mod types;

pub use manager::{EventKey, EventManager};
pub use raw::{EventValue, RawEvent};
pub use types::{EventCallback, EventInfo, HookResult};

pub use typed::{EventPlayerDeath, EventPlayerQuit, GameEvent};
