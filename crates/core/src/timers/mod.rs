//! Timer system for scheduling delayed and repeating callbacks
//!
//! Timers are processed every frame and can be configured to:
//! - Fire once after a delay
//! - Repeat at a fixed interval
//! - Fire on the very next frame before settling into their interval
//! - Stop themselves by returning [`TimerAction::Stop`]
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use insanekick_core::timers::{TimerAction, TimerFlags};
//!
//! // One-shot timer
//! let key = host.timers().add_timer(Duration::from_secs(5), TimerFlags::empty(), || {
//!     tracing::info!("5 seconds passed!");
//!     TimerAction::Stop
//! });
//!
//! // Repeating timer that counts down three times, starting right away
//! let mut remaining = 3;
//! host.timers().add_timer(
//!     Duration::from_secs(1),
//!     TimerFlags::REPEAT | TimerFlags::IMMEDIATE,
//!     move || {
//!         remaining -= 1;
//!         if remaining == 0 { TimerAction::Stop } else { TimerAction::Continue }
//!     },
//! );
//!
//! // Cancel a timer
//! host.timers().remove_timer(key);
//! ```

mod timer;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use slotmap::SlotMap;

pub use timer::{TimerAction, TimerCallback, TimerFlags, TimerKey};
use timer::Timer;

use crate::clock::Clock;

/// Timer registry
pub struct Timers {
    timers: RwLock<SlotMap<TimerKey, Timer>>,
    clock: Arc<dyn Clock>,
}

impl Timers {
    /// Create an empty registry reading time from `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            timers: RwLock::new(SlotMap::with_key()),
            clock,
        }
    }

    /// Schedule a callback
    ///
    /// # Arguments
    /// * `interval` - Delay (one-shot) or interval between executions (repeating)
    /// * `flags` - Combination of `TimerFlags` to control behavior
    /// * `callback` - Called when the timer fires; returning `TimerAction::Stop`
    ///   removes a repeating timer
    pub fn add_timer<F>(&self, interval: Duration, flags: TimerFlags, callback: F) -> TimerKey
    where
        F: FnMut() -> TimerAction + Send + 'static,
    {
        let timer = Timer::new(self.clock.now(), interval, flags, Box::new(callback));
        let key = self.timers.write().insert(timer);
        tracing::trace!("Added timer {:?} (interval {:?}, flags {:?})", key, interval, flags);
        key
    }

    /// Remove/cancel a timer
    ///
    /// # Returns
    /// `true` if the timer was found and removed, `false` if not found
    pub fn remove_timer(&self, key: TimerKey) -> bool {
        self.timers.write().remove(key).is_some()
    }

    /// Check if a timer is still scheduled
    pub fn contains(&self, key: TimerKey) -> bool {
        self.timers.read().contains_key(key)
    }

    /// Number of scheduled timers
    pub fn len(&self) -> usize {
        self.timers.read().len()
    }

    /// Check if no timers are scheduled
    pub fn is_empty(&self) -> bool {
        self.timers.read().is_empty()
    }

    /// Process all timers (called once per frame)
    ///
    /// Fires every timer that is due. Callbacks run without the registry
    /// lock held, so they may add or remove timers. One-shot timers and
    /// timers returning `TimerAction::Stop` are removed afterwards;
    /// repeating timers are rescheduled one interval from now.
    ///
    /// Returns the number of callbacks executed.
    pub fn process(&self) -> usize {
        let now = self.clock.now();

        let due: Vec<(TimerKey, Arc<Mutex<TimerCallback>>)> = self
            .timers
            .read()
            .iter()
            .filter(|(_, timer)| timer.is_due(now))
            .map(|(key, timer)| (key, Arc::clone(&timer.callback)))
            .collect();

        let mut fired = 0;
        for (key, callback) in due {
            // An earlier callback this frame may have cancelled it
            if !self.contains(key) {
                continue;
            }

            let action = {
                let mut callback = callback.lock();
                (*callback)()
            };
            fired += 1;

            let mut timers = self.timers.write();
            let stop = match timers.get_mut(key) {
                Some(timer) if action == TimerAction::Continue && timer.flags.contains(TimerFlags::REPEAT) => {
                    timer.next_fire = now + timer.interval;
                    false
                }
                Some(_) => true,
                None => false,
            };
            if stop {
                timers.remove(key);
            }
        }

        fired
    }
}
