//! Event system types

use super::RawEvent;

/// Result from an event handler determining how to proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookResult {
    /// Let the event through and keep calling hooks
    #[default]
    Continue,
    /// Block the event but keep calling the remaining pre-hooks
    Handled,
    /// Block the event and skip the remaining pre-hooks
    Stop,
}

/// Information passed to event handlers that can be modified
#[derive(Debug, Clone)]
pub struct EventInfo {
    /// If true, the host will not broadcast the event to other players
    pub dont_broadcast: bool,
}

impl EventInfo {
    /// Create new EventInfo with the given broadcast setting
    pub fn new(dont_broadcast: bool) -> Self {
        Self { dont_broadcast }
    }
}

pub type EventCallback = Box<dyn Fn(&RawEvent, &mut EventInfo) -> HookResult + Send + Sync>;
