use crate::domain::availability::Availability;
use crate::domain::inventory::Inventory;
use crate::domain::occupancy::random_source::RandomSource;

/// Builds a fresh snapshot in which a random prefix of every floor is occupied.
///
/// For each floor with `n > 0` rooms a `k` is drawn uniformly from `[0, n)` and the floor
/// keeps rooms `k..n`. At least one room per non-empty floor therefore stays free. Floors
/// without rooms stay empty and consume no draw. The previous snapshot is not consulted.
pub fn randomize_occupancy(inventory: &Inventory, source: &mut dyn RandomSource) -> Availability {
    let availability = Availability::from_floors(inventory.iter().map(|(floor, rooms)| {
        if rooms.is_empty() {
            return (*floor, Vec::new());
        }

        let occupied = source.next_index(rooms.len()).min(rooms.len() - 1);
        log::trace!("Floor {}: {} of {} rooms occupied.", floor, occupied, rooms.len());

        (*floor, rooms[occupied..].to_vec())
    }));

    log::debug!("Randomized occupancy: {} of {} rooms free.", availability.available_count(), inventory.total_rooms());

    availability
}
