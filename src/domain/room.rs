use serde::{Deserialize, Serialize};
use std::fmt;

/// Room numbers encode their floor in the hundreds: `room = floor * 100 + position`.
pub const ROOMS_PER_FLOOR_BASE: u32 = 100;

/// Floor identifier. Key into inventory and availability maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Floor(pub u32);

impl Floor {
    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Floor {
    fn from(value: u32) -> Self {
        Floor(value)
    }
}

/// A room number such as `305` (floor 3, position 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Room(pub u32);

impl Room {
    /// Builds a room number from its floor and 1-based position.
    pub fn on_floor(floor: Floor, position: u32) -> Self {
        Room(floor.0 * ROOMS_PER_FLOOR_BASE + position)
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// The floor this room belongs to (`room div 100`).
    pub fn floor(self) -> Floor {
        Floor(self.0 / ROOMS_PER_FLOOR_BASE)
    }

    /// Intra-floor slot (`room mod 100`). Used for horizontal travel distance.
    pub fn position(self) -> u32 {
        self.0 % ROOMS_PER_FLOOR_BASE
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Room {
    fn from(value: u32) -> Self {
        Room(value)
    }
}

/// Renders rooms the way booking summaries show them: `101, 102, 103`.
pub fn join_rooms(rooms: &[Room], separator: &str) -> String {
    rooms.iter().map(|room| room.to_string()).collect::<Vec<_>>().join(separator)
}
