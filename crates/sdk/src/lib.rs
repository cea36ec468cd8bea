//! InsaneKick SDK - Host Data Types
//!
//! This crate contains the plain data types exchanged between the host game
//! server and plugins. It has no dependencies and compiles quickly, allowing
//! parallel compilation of dependent crates.
//!
//! # Modules
//!
//! - [`player`] - Player identity, location and info snapshots
//! - [`display`] - Titles and sounds shown to players
//! - [`ticks`] - Host tick rate and conversions

pub mod display;
pub mod player;
pub mod ticks;

pub use display::{Sound, Title};
pub use player::{Location, PlayerId, PlayerInfo};
pub use ticks::{ticks_to_duration, TICKS_PER_SECOND};
