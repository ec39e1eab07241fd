use std::collections::{BTreeMap, HashSet, btree_map};

use crate::api::inventory_dto::InventoryDto;
use crate::domain::room::{Floor, Room};
use crate::error::{Error, Result};

/// Number of floors in the standard hotel.
pub const STANDARD_FLOOR_COUNT: u32 = 10;

/// Rooms on each of the floors 1..=9 of the standard hotel.
pub const STANDARD_ROOMS_PER_FLOOR: u32 = 10;

/// Rooms on the top floor of the standard hotel.
pub const STANDARD_TOP_FLOOR_ROOMS: u32 = 7;

/// The fixed room layout of the hotel: floor -> rooms in corridor order.
///
/// An inventory is built once and never changes afterwards. Every
/// [`Availability`](crate::domain::availability::Availability) snapshot is a per-floor
/// subsequence of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    floors: BTreeMap<Floor, Vec<Room>>,
}

impl Inventory {
    /// The seeded layout: floors 1-9 with rooms x01..x10, floor 10 with 1001..1007.
    pub fn standard() -> Self {
        let floors = (1..=STANDARD_FLOOR_COUNT)
            .map(|floor_number| {
                let floor = Floor(floor_number);
                let room_count = if floor_number == STANDARD_FLOOR_COUNT { STANDARD_TOP_FLOOR_ROOMS } else { STANDARD_ROOMS_PER_FLOOR };
                let rooms: Vec<Room> = (1..=room_count).map(|position| Room::on_floor(floor, position)).collect();
                (floor, rooms)
            })
            .collect();

        Inventory { floors }
    }

    /// Builds an inventory from explicit floors after checking its preconditions.
    ///
    /// Rejects duplicate room numbers, rooms whose number does not encode the floor they
    /// are listed under, and rooms with position 0. Room order within a floor is kept as given.
    pub fn from_floors<I>(floors: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Floor, Vec<Room>)>,
    {
        let mut seen: HashSet<Room> = HashSet::new();
        let mut map: BTreeMap<Floor, Vec<Room>> = BTreeMap::new();

        for (floor, rooms) in floors {
            if map.contains_key(&floor) {
                return Err(Error::InvalidInventory(format!("floor {} is listed more than once", floor)));
            }

            for room in &rooms {
                if room.floor() != floor {
                    return Err(Error::InvalidInventory(format!("room {} is listed on floor {} but encodes floor {}", room, floor, room.floor())));
                }
                if room.position() == 0 {
                    return Err(Error::InvalidInventory(format!("room {} has no position on its floor", room)));
                }
                if !seen.insert(*room) {
                    return Err(Error::InvalidInventory(format!("room {} appears more than once", room)));
                }
            }

            map.insert(floor, rooms);
        }

        log::debug!("Inventory built with {} floors and {} rooms.", map.len(), seen.len());

        Ok(Inventory { floors: map })
    }

    pub fn from_dto(dto: InventoryDto) -> Result<Self> {
        Self::from_floors(
            dto.floors.into_iter().map(|floor_dto| (Floor(floor_dto.floor), floor_dto.rooms.into_iter().map(Room).collect::<Vec<Room>>())),
        )
    }

    /// Rooms on `floor` in corridor order, or an empty slice for an unknown floor.
    pub fn rooms_on(&self, floor: Floor) -> &[Room] {
        self.floors.get(&floor).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, room: Room) -> bool {
        self.rooms_on(room.floor()).contains(&room)
    }

    pub fn floors(&self) -> btree_map::Keys<'_, Floor, Vec<Room>> {
        self.floors.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Floor, Vec<Room>> {
        self.floors.iter()
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn total_rooms(&self) -> usize {
        self.floors.values().map(Vec::len).sum()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::standard()
    }
}
