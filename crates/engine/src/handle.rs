//! Shared engine handle
//!
//! The host's [`GameServer`] is handed over once during startup and stored
//! here. Cloning the handle is cheap; all clones refer to the same server.

use std::fmt;
use std::sync::Arc;

use insanekick_sdk::{PlayerId, PlayerInfo};

use crate::server::GameServer;

/// Cloneable reference to the host game server
#[derive(Clone)]
pub struct EngineHandle {
    server: Arc<dyn GameServer>,
}

impl EngineHandle {
    /// Wrap the host's server implementation
    pub fn new(server: Arc<dyn GameServer>) -> Self {
        tracing::debug!("Engine handle created for {} {}", server.name(), server.version());
        Self { server }
    }

    /// Get the underlying server
    pub fn server(&self) -> &dyn GameServer {
        self.server.as_ref()
    }

    /// Look up a connected player's snapshot
    ///
    /// Returns `None` for unknown ids and for players that are offline.
    pub fn online_player(&self, id: PlayerId) -> Option<PlayerInfo> {
        if self.server.is_online(id) {
            self.server.player(id)
        } else {
            None
        }
    }

    /// Find an online player by case-insensitive name
    pub fn find_player_by_name(&self, name: &str) -> Option<PlayerInfo> {
        let name_lower = name.to_lowercase();
        self.server
            .online_players()
            .into_iter()
            .filter_map(|id| self.server.player(id))
            .find(|p| p.name.to_lowercase() == name_lower)
    }

    /// Display name for a player, falling back to the id
    pub fn player_name(&self, id: PlayerId) -> String {
        self.server
            .player(id)
            .map(|p| p.name)
            .unwrap_or_else(|| id.to_string())
    }
}

impl fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineHandle")
            .field("server", &self.server.name())
            .finish()
    }
}
