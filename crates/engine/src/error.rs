//! Error types for host operations

use insanekick_sdk::PlayerId;

/// Error returned by side-effecting host calls
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// No player with this id is known to the host
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// The player's network connection is already gone
    #[error("Connection already closed for player {0}")]
    ConnectionClosed(PlayerId),

    /// The host refused the operation
    #[error("Host rejected operation: {0}")]
    Rejected(String),
}
