//! Typed game event structures
//!
//! Provides strongly-typed wrappers around the player lifecycle events.

use insanekick_sdk::PlayerId;

use super::raw::{EventValue, RawEvent};

/// Trait for typed game events
pub trait GameEvent: Sized {
    /// The event name (e.g., "player_death")
    const NAME: &'static str;

    /// Create from a raw event reference
    fn from_raw(event: &RawEvent) -> Self;

    /// Convert into a raw event the host can fire
    fn to_raw(&self) -> RawEvent;
}

/// Player death event
#[derive(Debug, Clone, PartialEq)]
pub struct EventPlayerDeath {
    /// Player who died
    pub userid: PlayerId,
    /// Death message shown in chat, if the host produced one
    pub message: Option<String>,
}

impl GameEvent for EventPlayerDeath {
    const NAME: &'static str = "player_death";

    fn from_raw(event: &RawEvent) -> Self {
        Self {
            userid: PlayerId(event.get_uint64("userid", 0)),
            message: event.get_string_opt("message"),
        }
    }

    fn to_raw(&self) -> RawEvent {
        let event = RawEvent::new(Self::NAME).with("userid", EventValue::UInt64(self.userid.0));
        match &self.message {
            Some(message) => event.with("message", EventValue::String(message.clone())),
            None => event,
        }
    }
}

/// Player left the server (disconnect or kick)
#[derive(Debug, Clone, PartialEq)]
pub struct EventPlayerQuit {
    pub userid: PlayerId,
    /// Was the player kicked?
    pub kicked: bool,
}

impl GameEvent for EventPlayerQuit {
    const NAME: &'static str = "player_quit";

    fn from_raw(event: &RawEvent) -> Self {
        Self {
            userid: PlayerId(event.get_uint64("userid", 0)),
            kicked: event.get_bool("kicked", false),
        }
    }

    fn to_raw(&self) -> RawEvent {
        RawEvent::new(Self::NAME)
            .with("userid", EventValue::UInt64(self.userid.0))
            .with("kicked", EventValue::Bool(self.kicked))
    }
}
