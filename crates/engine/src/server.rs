//! Host game server interface
//!
//! Everything the framework needs from the running server that is not an
//! event, a timer or a command lives behind this trait: player lookup,
//! on-screen feedback, chat, and disconnecting players.

use insanekick_sdk::{Location, PlayerId, PlayerInfo, Sound, Title};

use crate::error::HostError;

/// Player, world and network operations provided by the host
///
/// Implementations must be callable from the main game thread; the
/// framework never calls them from other threads.
pub trait GameServer: Send + Sync {
    /// Server software name
    fn name(&self) -> String;

    /// Server software version
    fn version(&self) -> String;

    /// Maximum number of player slots
    fn max_players(&self) -> usize;

    /// Ids of all currently connected players
    fn online_players(&self) -> Vec<PlayerId>;

    /// Snapshot of a player's state, `None` if the host does not know the id
    fn player(&self, id: PlayerId) -> Option<PlayerInfo>;

    /// Whether the player is currently connected
    fn is_online(&self, id: PlayerId) -> bool {
        self.online_players().contains(&id)
    }

    /// Send a chat message to a player
    fn send_message(&self, id: PlayerId, message: &str);

    /// Show a title on a player's screen
    fn send_title(&self, id: PlayerId, title: &Title);

    /// Play a sound for a player at a location
    fn play_sound(&self, id: PlayerId, sound: &Sound, at: &Location);

    /// Disconnect a player, showing `reason` on their screen
    fn kick(&self, id: PlayerId, reason: &str) -> Result<(), HostError>;
}
