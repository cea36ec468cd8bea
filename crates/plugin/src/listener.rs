//! Death listener
//!
//! Records every death and schedules the kick countdown.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use insanekick_core::events::{EventPlayerDeath, EventPlayerQuit};
use insanekick_core::{EventKey, Host, HookResult, TimerFlags, TimerKey};
use insanekick_sdk::{ticks_to_duration, Location, PlayerId, PlayerInfo, TICKS_PER_SECOND};

use crate::kick::KickCountdown;
use crate::state::SharedState;

/// Cause logged when the host didn't provide a death message
pub const UNKNOWN_CAUSE: &str = "unknown cause";

/// Handles death and quit events for the plugin
///
/// Clones share the same pending-kick table.
#[derive(Clone)]
pub struct DeathListener {
    host: Host,
    state: SharedState,
    /// Countdown timer per player
    pending: Arc<Mutex<HashMap<PlayerId, TimerKey>>>,
    /// Event handlers registered by `register`
    handlers: Arc<Mutex<Vec<EventKey>>>,
}

impl DeathListener {
    pub fn new(host: Host, state: SharedState) -> Self {
        Self {
            host,
            state,
            pending: Arc::new(Mutex::new(HashMap::new())),
            handlers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Hook player death and quit events
    pub fn register(&self) {
        let events = self.host.events();

        let listener = self.clone();
        let death = events.register_typed::<EventPlayerDeath, _>(true, move |event, _info| {
            listener.on_player_death(&event);
            HookResult::Continue
        });

        let listener = self.clone();
        let quit = events.register_typed::<EventPlayerQuit, _>(true, move |event, _info| {
            listener.on_player_quit(&event);
            HookResult::Continue
        });

        self.handlers.lock().extend([death, quit]);
        tracing::debug!("Death listener registered");
    }

    /// Remove the event hooks and any countdowns still running
    pub fn unregister(&self) {
        let events = self.host.events();
        for key in self.handlers.lock().drain(..) {
            events.unregister(key);
        }
        let cancelled = self.cancel_pending();
        tracing::debug!("Death listener unregistered ({} pending kicks cancelled)", cancelled);
    }

    pub fn on_player_death(&self, event: &EventPlayerDeath) {
        let player = event.userid;

        let (delay, message, debug) = {
            let state = self.state.read();
            if !state.is_enabled() {
                tracing::debug!("Plugin is disabled, ignoring death of {}", player);
                return;
            }
            (state.kick_delay(), state.kick_message().to_string(), state.is_debug())
        };

        let deaths = self.state.write().record_death(player);

        let info = self.host.engine().server().player(player).unwrap_or_else(|| {
            tracing::warn!("Death event for unknown player {}", player);
            PlayerInfo::new(player, player.to_string(), Location::default())
        });

        tracing::info!(
            "{} ({}) died: {} [{}] (deaths: {})",
            info.name,
            player,
            event.message.as_deref().unwrap_or(UNKNOWN_CAUSE),
            info.location,
            deaths
        );
        if debug {
            tracing::debug!(
                "{}: health {:.1}, level {}, experience {}",
                info.name,
                info.health,
                info.level,
                info.total_experience
            );
        }

        self.schedule_kick(&info, delay, message);
    }

    pub fn on_player_quit(&self, event: &EventPlayerQuit) {
        if let Some(key) = self.pending.lock().remove(&event.userid) {
            if self.host.timers().remove_timer(key) {
                tracing::debug!("{} left, pending kick cancelled", event.userid);
            }
        }
    }

    fn schedule_kick(&self, info: &PlayerInfo, delay: u32, message: String) {
        let mut countdown = KickCountdown::new(
            info,
            delay,
            message,
            self.host.engine().clone(),
            Arc::clone(&self.state),
            Arc::clone(self.host.permissions()),
        );

        let timers = self.host.timers();
        let key = timers.add_timer(
            ticks_to_duration(TICKS_PER_SECOND),
            TimerFlags::REPEAT | TimerFlags::IMMEDIATE,
            move || countdown.tick(),
        );

        let mut pending = self.pending.lock();
        pending.retain(|_, key| timers.contains(*key));
        if let Some(previous) = pending.insert(info.id, key) {
            if timers.remove_timer(previous) {
                tracing::debug!("Replaced pending kick for {}", info.name);
            }
        }

        tracing::debug!("Scheduled kick for {} in {}s", info.name, delay);
    }

    /// Number of deaths on file for a player
    pub fn death_count(&self, player: PlayerId) -> u32 {
        self.state.read().death_count(player)
    }

    /// When the player last died, if ever
    pub fn last_death(&self, player: PlayerId) -> Option<Instant> {
        self.state.read().last_death_time(player)
    }

    /// Clear one player's statistics
    pub fn reset(&self, player: PlayerId) -> bool {
        let removed = self.state.write().reset_deaths(player);
        tracing::debug!("Reset death statistics for {}", player);
        removed
    }

    /// Clear every player's statistics
    pub fn clear_all(&self) {
        let cleared = self.state.write().clear_deaths();
        tracing::info!("Cleared death statistics for {} players", cleared);
    }

    /// Snapshot of death counts per player
    pub fn death_statistics(&self) -> HashMap<PlayerId, u32> {
        self.state.read().death_counts()
    }

    /// Players with a countdown still running
    pub fn pending_kicks(&self) -> Vec<PlayerId> {
        let timers = self.host.timers();
        let mut pending = self.pending.lock();
        pending.retain(|_, key| timers.contains(*key));
        let mut players: Vec<PlayerId> = pending.keys().copied().collect();
        players.sort();
        players
    }

    /// Stop every running countdown
    pub fn cancel_pending(&self) -> usize {
        let timers = self.host.timers();
        self.pending
            .lock()
            .drain()
            .filter(|(_, key)| timers.remove_timer(*key))
            .count()
    }
}
