//! In-memory game server for tests
//!
//! `FakeServer` keeps a table of players and records every side effect the
//! framework asks for, so tests can assert on exactly what a player saw.
//!
//! # Example
//!
//! ```ignore
//! use insanekick_engine::testing::{FakeServer, ServerAction};
//!
//! let server = Arc::new(FakeServer::new());
//! server.add_player(PlayerInfo::new(PlayerId(1), "Steve", Location::default()));
//! // ... run code against EngineHandle::new(server.clone()) ...
//! assert_eq!(server.kicks().len(), 1);
//! ```

use std::collections::HashMap;

use parking_lot::RwLock;

use insanekick_sdk::{Location, PlayerId, PlayerInfo, Sound, Title};

use crate::error::HostError;
use crate::server::GameServer;

/// A side effect performed through the server
#[derive(Debug, Clone, PartialEq)]
pub enum ServerAction {
    Message { to: PlayerId, text: String },
    Title { to: PlayerId, title: Title },
    Sound { to: PlayerId, sound: Sound, at: Location },
    Kick { player: PlayerId, reason: String },
}

#[derive(Debug)]
struct FakePlayer {
    info: PlayerInfo,
    online: bool,
}

#[derive(Debug, Default)]
struct FakeState {
    players: HashMap<PlayerId, FakePlayer>,
    /// Join order, so `online_players` is deterministic
    order: Vec<PlayerId>,
    actions: Vec<ServerAction>,
    fail_kicks: bool,
}

/// In-memory [`GameServer`] implementation
#[derive(Debug)]
pub struct FakeServer {
    max_players: usize,
    state: RwLock<FakeState>,
}

impl Default for FakeServer {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeServer {
    /// Create an empty server with 20 slots
    pub fn new() -> Self {
        Self {
            max_players: 20,
            state: RwLock::new(FakeState::default()),
        }
    }

    /// Connect a player (or reconnect a known one)
    pub fn add_player(&self, info: PlayerInfo) {
        let mut state = self.state.write();
        let id = info.id;
        if !state.order.contains(&id) {
            state.order.push(id);
        }
        state.players.insert(id, FakePlayer { info, online: true });
    }

    /// Mark a player as disconnected; the host still remembers them
    pub fn disconnect(&self, id: PlayerId) {
        if let Some(player) = self.state.write().players.get_mut(&id) {
            player.online = false;
        }
    }

    /// Make every subsequent `kick` fail with `ConnectionClosed`
    pub fn fail_kicks(&self, fail: bool) {
        self.state.write().fail_kicks = fail;
    }

    /// All recorded actions in order
    pub fn actions(&self) -> Vec<ServerAction> {
        self.state.read().actions.clone()
    }

    /// Forget recorded actions
    pub fn clear_actions(&self) {
        self.state.write().actions.clear();
    }

    /// Titles shown to a player, in order
    pub fn titles_for(&self, id: PlayerId) -> Vec<Title> {
        self.state
            .read()
            .actions
            .iter()
            .filter_map(|a| match a {
                ServerAction::Title { to, title } if *to == id => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    /// Chat messages sent to a player, in order
    pub fn messages_for(&self, id: PlayerId) -> Vec<String> {
        self.state
            .read()
            .actions
            .iter()
            .filter_map(|a| match a {
                ServerAction::Message { to, text } if *to == id => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Successful kicks as (player, reason)
    pub fn kicks(&self) -> Vec<(PlayerId, String)> {
        self.state
            .read()
            .actions
            .iter()
            .filter_map(|a| match a {
                ServerAction::Kick { player, reason } => Some((*player, reason.clone())),
                _ => None,
            })
            .collect()
    }

    fn record(&self, action: ServerAction) {
        self.state.write().actions.push(action);
    }
}

impl GameServer for FakeServer {
    fn name(&self) -> String {
        "FakeServer".to_string()
    }

    fn version(&self) -> String {
        "1.0-test".to_string()
    }

    fn max_players(&self) -> usize {
        self.max_players
    }

    fn online_players(&self) -> Vec<PlayerId> {
        let state = self.state.read();
        state
            .order
            .iter()
            .filter(|id| state.players.get(id).is_some_and(|p| p.online))
            .copied()
            .collect()
    }

    fn player(&self, id: PlayerId) -> Option<PlayerInfo> {
        self.state.read().players.get(&id).map(|p| p.info.clone())
    }

    fn send_message(&self, id: PlayerId, message: &str) {
        self.record(ServerAction::Message {
            to: id,
            text: message.to_string(),
        });
    }

    fn send_title(&self, id: PlayerId, title: &Title) {
        self.record(ServerAction::Title {
            to: id,
            title: title.clone(),
        });
    }

    fn play_sound(&self, id: PlayerId, sound: &Sound, at: &Location) {
        self.record(ServerAction::Sound {
            to: id,
            sound: sound.clone(),
            at: at.clone(),
        });
    }

    fn kick(&self, id: PlayerId, reason: &str) -> Result<(), HostError> {
        let mut state = self.state.write();
        if state.fail_kicks {
            return Err(HostError::ConnectionClosed(id));
        }
        let player = state
            .players
            .get_mut(&id)
            .ok_or(HostError::PlayerNotFound(id))?;
        if !player.online {
            return Err(HostError::ConnectionClosed(id));
        }
        player.online = false;
        state.actions.push(ServerAction::Kick {
            player: id,
            reason: reason.to_string(),
        });
        Ok(())
    }
}
