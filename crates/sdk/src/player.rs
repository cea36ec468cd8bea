//! Player identity and snapshot types

use std::fmt;

/// Opaque unique identifier of a player, stable across reconnects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u64);

impl From<u64> for PlayerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Position of an entity inside a named world
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    /// World (dimension) name
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Location {
    /// Create a new location
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// Block X coordinate (floored)
    pub fn block_x(&self) -> i64 {
        self.x.floor() as i64
    }

    /// Block Y coordinate (floored)
    pub fn block_y(&self) -> i64 {
        self.y.floor() as i64
    }

    /// Block Z coordinate (floored)
    pub fn block_z(&self) -> i64 {
        self.z.floor() as i64
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "World: {}, X: {}, Y: {}, Z: {}",
            self.world,
            self.block_x(),
            self.block_y(),
            self.block_z()
        )
    }
}

/// Snapshot of a player's state as reported by the host
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInfo {
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Current position
    pub location: Location,
    /// Current health (0 when dead)
    pub health: f32,
    /// Experience level
    pub level: u32,
    /// Total experience points
    pub total_experience: u32,
}

impl PlayerInfo {
    /// Create a snapshot with full health and no experience
    pub fn new(id: PlayerId, name: impl Into<String>, location: Location) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            health: 20.0,
            level: 0,
            total_experience: 0,
        }
    }
}
