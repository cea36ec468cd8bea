//! Timer struct and flags

use std::sync::Arc;
use std::time::{Duration, Instant};

use bitflags::bitflags;
use parking_lot::Mutex;
use slotmap::new_key_type;

new_key_type! {
    /// Key for registered timers
    pub struct TimerKey;
}

bitflags! {
    /// Flags that control timer behavior
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TimerFlags: u32 {
        /// Timer repeats at the specified interval until cancelled
        const REPEAT = 0x01;
        /// First firing happens on the next frame instead of after one interval
        const IMMEDIATE = 0x02;
    }
}

/// What a timer callback wants to happen next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerAction {
    /// Keep the timer scheduled (ignored for one-shot timers)
    #[default]
    Continue,
    /// Remove the timer after this call
    Stop,
}

/// Boxed timer callback
pub type TimerCallback = Box<dyn FnMut() -> TimerAction + Send + 'static>;

/// A scheduled timer that fires a callback after a delay
pub(crate) struct Timer {
    /// Time between executions (or delay for one-shot timers)
    pub interval: Duration,
    /// The callback to execute
    ///
    /// Shared so it can run without holding the registry lock.
    pub callback: Arc<Mutex<TimerCallback>>,
    /// Behavior flags
    pub flags: TimerFlags,
    /// When this timer should next fire
    pub next_fire: Instant,
}

impl Timer {
    /// Create a new timer scheduled relative to `now`
    pub fn new(now: Instant, interval: Duration, flags: TimerFlags, callback: TimerCallback) -> Self {
        let next_fire = if flags.contains(TimerFlags::IMMEDIATE) {
            now
        } else {
            now + interval
        };
        Self {
            interval,
            callback: Arc::new(Mutex::new(callback)),
            flags,
            next_fire,
        }
    }

    /// Whether the timer is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_fire
    }
}
