use serde::Serialize;
use std::collections::{BTreeMap, btree_map};

use crate::domain::inventory::Inventory;
use crate::domain::room::{Floor, Room};

/// Snapshot of the rooms that are currently free, per floor.
///
/// Each floor holds a subsequence of the inventory's rooms for that floor, in inventory
/// order. Snapshots are never mutated in place: every transition returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Availability {
    floors: BTreeMap<Floor, Vec<Room>>,
}

impl Availability {
    /// Every inventory room is free. This is the reset state.
    pub fn from_inventory(inventory: &Inventory) -> Self {
        Availability { floors: inventory.iter().map(|(floor, rooms)| (*floor, rooms.clone())).collect() }
    }

    /// Builds a snapshot from explicit per-floor room lists.
    ///
    /// No check against an inventory is made here; use [`Availability::is_consistent_with`]
    /// where that matters.
    pub fn from_floors<I>(floors: I) -> Self
    where
        I: IntoIterator<Item = (Floor, Vec<Room>)>,
    {
        Availability { floors: floors.into_iter().collect() }
    }

    /// Returns a new snapshot with `booked` removed from their floors.
    ///
    /// A room's floor is derived from its number. Rooms that are not free (or sit on an
    /// unknown floor) are skipped, so removing the same rooms twice is a no-op.
    pub fn remove_booked(&self, booked: &[Room]) -> Availability {
        let mut updated = self.clone();

        for room in booked {
            match updated.floors.get_mut(&room.floor()) {
                Some(rooms) => rooms.retain(|free| free != room),
                None => log::trace!("Room {} is on unknown floor {}, nothing to remove.", room, room.floor()),
            }
        }

        updated
    }

    /// Free rooms on `floor`, front first. Empty for unknown floors.
    pub fn rooms_on(&self, floor: Floor) -> &[Room] {
        self.floors.get(&floor).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_available(&self, room: Room) -> bool {
        self.rooms_on(room.floor()).contains(&room)
    }

    /// Floors in ascending order with their free rooms.
    pub fn iter(&self) -> btree_map::Iter<'_, Floor, Vec<Room>> {
        self.floors.iter()
    }

    pub fn available_count(&self) -> usize {
        self.floors.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.available_count() == 0
    }

    /// Checks the snapshot invariant: every floor is an order-preserving subsequence of the
    /// inventory's floor, without duplicates or foreign rooms.
    pub fn is_consistent_with(&self, inventory: &Inventory) -> bool {
        self.floors.iter().all(|(floor, free)| {
            let mut all = inventory.rooms_on(*floor).iter();
            free.iter().all(|room| all.any(|candidate| candidate == room))
        })
    }

    /// Every inventory room with its free/occupied flag, floor by floor.
    pub fn occupancy_grid(&self, inventory: &Inventory) -> Vec<FloorOccupancy> {
        inventory
            .iter()
            .map(|(floor, rooms)| FloorOccupancy {
                floor: *floor,
                rooms: rooms.iter().map(|room| RoomStatus { room: *room, available: self.is_available(*room) }).collect(),
            })
            .collect()
    }
}

/// Returns `availability` without the `booked` rooms. See [`Availability::remove_booked`].
pub fn remove_booked(availability: &Availability, booked: &[Room]) -> Availability {
    availability.remove_booked(booked)
}

/// One floor of the occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloorOccupancy {
    pub floor: Floor,
    pub rooms: Vec<RoomStatus>,
}

impl FloorOccupancy {
    pub fn available_count(&self) -> usize {
        self.rooms.iter().filter(|status| status.available).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomStatus {
    pub room: Room,
    pub available: bool,
}
