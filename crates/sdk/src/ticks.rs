//! Host tick rate
//!
//! The host advances its world at a fixed tick rate. Durations that the
//! host expresses in ticks (title fades, scheduler delays) convert through
//! these helpers.

use std::time::Duration;

/// Ticks simulated per second
pub const TICKS_PER_SECOND: u32 = 20;

/// Convert a tick count into wall-clock duration
pub fn ticks_to_duration(ticks: u32) -> Duration {
    Duration::from_millis(u64::from(ticks) * 1000 / u64::from(TICKS_PER_SECOND))
}
