//! Console and Chat Command System
//!
//! Provides unified command handling for both console and chat commands.
//!
//! # Architecture
//!
//! ```text
//! host console / chat line → CommandManager → Rust callbacks
//! ```
//!
//! # Triggers
//!
//! - Every command is reachable from the server and client consoles by name
//! - In chat, `!name` runs it and keeps the line visible, `/name` runs it silently
//!
//! # Example
//!
//! ```ignore
//! use insanekick_core::commands::CommandResult;
//!
//! host.commands().register("ping", None, |_player, info| {
//!     info.reply("Pong!");
//!     CommandResult::Handled
//! });
//!
//! // Now callable as:
//! // - `ping` in console
//! // - `!ping` or `/ping` in chat
//! ```

pub mod chat;
mod info;
mod manager;

pub use info::{CommandCallback, CommandContext, CommandInfo, CommandResult};
pub use manager::{ChatDispatch, CommandKey, CommandManager};
