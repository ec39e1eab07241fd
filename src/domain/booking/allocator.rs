use crate::domain::availability::Availability;
use crate::domain::booking::booking_result::BookingResult;
use crate::domain::booking::travel_time::TravelTime;
use crate::domain::room::{Floor, Room};

/// Picks `count` rooms greedily: lowest floor first, front of the corridor first.
///
/// Walks the floors in ascending order and takes as many rooms as are still needed from
/// the front of each floor until the request is filled or the hotel runs out. The result
/// is deterministic but not globally optimal in travel time.
///
/// Never fails: a `count` of zero or less yields an empty result, and a `count` larger
/// than the free rooms yields every free room. `availability` is left untouched; apply
/// the booking with [`Availability::remove_booked`].
pub fn allocate(availability: &Availability, count: i64) -> BookingResult {
    if count <= 0 {
        log::debug!("Nothing to allocate for a request of {} rooms.", count);
        return BookingResult::empty(count);
    }

    let wanted = usize::try_from(count).unwrap_or(usize::MAX);
    let mut rooms: Vec<Room> = Vec::with_capacity(wanted.min(availability.available_count()));
    let mut floors_used: Vec<Floor> = Vec::new();

    for (floor, free) in availability.iter() {
        if rooms.len() >= wanted {
            break;
        }

        let take = (wanted - rooms.len()).min(free.len());
        if take == 0 {
            continue;
        }

        rooms.extend_from_slice(&free[..take]);
        floors_used.push(*floor);
    }

    let travel_time = TravelTime::estimate(&rooms, &floors_used);

    log::debug!("Allocated {}/{} rooms over {} floors, travel time {}.", rooms.len(), count, floors_used.len(), travel_time);

    BookingResult { requested: count, rooms, floors_used, travel_time }
}
