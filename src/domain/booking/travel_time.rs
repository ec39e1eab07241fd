use serde::Serialize;
use std::fmt;

use crate::domain::room::{Floor, Room};

/// Minutes charged per floor of vertical spread between booked rooms.
pub const VERTICAL_TRAVEL_FACTOR: u32 = 2;

/// Estimated walking time across a set of booked rooms, split into its two components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TravelTime {
    /// Spread of room positions along the corridor.
    pub horizontal: u32,
    /// Spread of used floors, scaled by [`VERTICAL_TRAVEL_FACTOR`].
    pub vertical: u32,
}

impl TravelTime {
    /// Travel time of `rooms`, drawn from `used_floors`.
    ///
    /// Horizontal time needs at least two rooms, vertical time at least two floors.
    pub fn estimate(rooms: &[Room], used_floors: &[Floor]) -> Self {
        let horizontal = if rooms.len() > 1 { spread(rooms.iter().map(|room| room.position())) } else { 0 };

        let vertical = if used_floors.len() > 1 { spread(used_floors.iter().map(|floor| floor.number())) * VERTICAL_TRAVEL_FACTOR } else { 0 };

        TravelTime { horizontal, vertical }
    }

    pub fn total(&self) -> u32 {
        self.horizontal + self.vertical
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} minutes", self.total())
    }
}

fn spread(values: impl Iterator<Item = u32>) -> u32 {
    let (min, max) = values.fold((u32::MAX, u32::MIN), |(min, max), value| (min.min(value), max.max(value)));
    max.saturating_sub(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_room_costs_nothing() {
        let time = TravelTime::estimate(&[Room(507)], &[Floor(5)]);
        assert_eq!(time, TravelTime::default());
        assert_eq!(time.total(), 0);
    }

    #[test]
    fn horizontal_uses_position_spread_not_room_number() {
        let time = TravelTime::estimate(&[Room(102), Room(103), Room(107)], &[Floor(1)]);
        assert_eq!(time.horizontal, 5);
        assert_eq!(time.vertical, 0);
    }

    #[test]
    fn vertical_scales_floor_spread() {
        let time = TravelTime::estimate(&[Room(310), Room(401), Room(601)], &[Floor(3), Floor(4), Floor(6)]);
        assert_eq!(time.horizontal, 9);
        assert_eq!(time.vertical, 3 * VERTICAL_TRAVEL_FACTOR);
        assert_eq!(time.total(), 15);
        assert_eq!(time.to_string(), "15 minutes");
    }
}
