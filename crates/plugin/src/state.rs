//! Plugin state shared between the listener, kick timers and the admin command

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use insanekick_core::Clock;
use insanekick_sdk::PlayerId;

use crate::config::KickConfig;

/// State handle passed to everything that needs it
pub type SharedState = Arc<RwLock<PluginState>>;

/// Deaths on file for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeathRecord {
    pub count: u32,
    pub last_death: Instant,
}

/// Configuration plus per-player death statistics
pub struct PluginState {
    config: KickConfig,
    deaths: HashMap<PlayerId, DeathRecord>,
    clock: Arc<dyn Clock>,
    started_at: Instant,
}

impl PluginState {
    pub fn new(config: KickConfig, clock: Arc<dyn Clock>) -> Self {
        let started_at = clock.now();
        Self {
            config,
            deaths: HashMap::new(),
            clock,
            started_at,
        }
    }

    /// Wrap into a [`SharedState`]
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Record a death at the current time, returning the player's new total
    pub fn record_death(&mut self, player: PlayerId) -> u32 {
        let now = self.clock.now();
        let record = self.deaths.entry(player).or_insert(DeathRecord {
            count: 0,
            last_death: now,
        });
        record.count = record.count.saturating_add(1);
        record.last_death = now;

        tracing::debug!("Recorded death of {} (total: {})", player, record.count);
        record.count
    }

    /// Number of deaths on file (0 if none)
    pub fn death_count(&self, player: PlayerId) -> u32 {
        self.deaths.get(&player).map(|r| r.count).unwrap_or(0)
    }

    /// When the player last died, if ever
    pub fn last_death_time(&self, player: PlayerId) -> Option<Instant> {
        self.deaths.get(&player).map(|r| r.last_death)
    }

    pub fn death_record(&self, player: PlayerId) -> Option<DeathRecord> {
        self.deaths.get(&player).copied()
    }

    /// Forget one player's deaths, returning whether anything was on file
    pub fn reset_deaths(&mut self, player: PlayerId) -> bool {
        self.deaths.remove(&player).is_some()
    }

    /// Forget every player's deaths
    pub fn clear_deaths(&mut self) -> usize {
        let cleared = self.deaths.len();
        self.deaths.clear();
        cleared
    }

    /// Snapshot of death counts per player
    pub fn death_counts(&self) -> HashMap<PlayerId, u32> {
        self.deaths.iter().map(|(id, r)| (*id, r.count)).collect()
    }

    /// Number of players with at least one death on file
    pub fn recorded_deaths(&self) -> usize {
        self.deaths.len()
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn is_debug(&self) -> bool {
        self.config.debug_mode
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug_mode = debug;
    }

    /// Countdown length in seconds
    pub fn kick_delay(&self) -> u32 {
        self.config.kick_delay
    }

    pub fn kick_message(&self) -> &str {
        &self.config.kick_message
    }

    pub fn config(&self) -> &KickConfig {
        &self.config
    }

    /// Swap in a freshly loaded configuration; death records are kept
    pub fn replace_config(&mut self, config: KickConfig) {
        self.config = config;
    }

    /// Time since the plugin was loaded
    pub fn uptime(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started_at)
    }
}

impl std::fmt::Debug for PluginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginState")
            .field("config", &self.config)
            .field("recorded_deaths", &self.deaths.len())
            .field("started_at", &self.started_at)
            .finish()
    }
}
