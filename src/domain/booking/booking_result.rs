use serde::Serialize;

use crate::domain::booking::travel_time::TravelTime;
use crate::domain::room::{Floor, Room};

/// Outcome of a single booking request.
///
/// Replaced by the next booking and cleared by a reset or randomization. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingResult {
    /// Number of rooms the caller asked for, as passed to the allocator.
    pub requested: i64,
    /// Booked rooms, lowest floor first, corridor order within a floor.
    pub rooms: Vec<Room>,
    /// Floors that contributed at least one room, ascending.
    pub floors_used: Vec<Floor>,
    pub travel_time: TravelTime,
}

impl BookingResult {
    pub fn empty(requested: i64) -> Self {
        BookingResult { requested, rooms: Vec::new(), floors_used: Vec::new(), travel_time: TravelTime::default() }
    }

    pub fn total_travel_time(&self) -> u32 {
        self.travel_time.total()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// True when fewer rooms were booked than requested.
    pub fn is_partial(&self) -> bool {
        self.requested > 0 && (self.rooms.len() as i64) < self.requested
    }
}
