use crate::domain::availability::{Availability, FloorOccupancy};
use crate::domain::booking::{BookingHistory, BookingResult, allocate};
use crate::domain::inventory::Inventory;
use crate::domain::occupancy::{RandomSource, randomize_occupancy};
use crate::domain::room::join_rooms;

/// Upper bound on rooms per booking request, as offered to guests.
pub const DEFAULT_MAX_ROOMS_PER_BOOKING: i64 = 5;

/// Caller-side state around the pure booking functions.
///
/// Holds the inventory, the current availability snapshot, the last booking and the
/// bookings made since the last reset. Every transition swaps in a new snapshot computed
/// by the core functions; nothing is edited in place.
#[derive(Debug, Clone)]
pub struct BookingSession {
    inventory: Inventory,
    availability: Availability,
    last_booking: Option<BookingResult>,
    history: BookingHistory,
    max_rooms_per_booking: i64,
}

impl BookingSession {
    pub fn new(inventory: Inventory) -> Self {
        let availability = Availability::from_inventory(&inventory);
        BookingSession { inventory, availability, last_booking: None, history: BookingHistory::new(), max_rooms_per_booking: DEFAULT_MAX_ROOMS_PER_BOOKING }
    }

    /// Overrides the per-booking cap. Values below 1 are raised to 1.
    pub fn with_max_rooms_per_booking(mut self, max_rooms: i64) -> Self {
        self.max_rooms_per_booking = max_rooms.max(1);
        self
    }

    /// Books up to `count` rooms and removes them from the availability.
    ///
    /// Counts above the per-booking cap are lowered to the cap. Counts of zero or less
    /// produce an empty booking.
    pub fn book(&mut self, count: i64) -> &BookingResult {
        let count = if count > self.max_rooms_per_booking {
            log::warn!("Requested {} rooms, limiting to {} per booking.", count, self.max_rooms_per_booking);
            self.max_rooms_per_booking
        } else {
            count
        };

        let result = allocate(&self.availability, count);
        self.availability = self.availability.remove_booked(&result.rooms);

        if result.is_partial() {
            log::warn!("Only {} of {} requested rooms were free.", result.rooms.len(), count);
        }
        log::info!("Booked rooms [{}], total travel time {}.", join_rooms(&result.rooms, ", "), result.travel_time);

        self.history.record(result.clone());
        self.last_booking.insert(result)
    }

    /// Replaces the availability with a random occupancy snapshot and clears the last booking.
    pub fn randomize(&mut self, source: &mut dyn RandomSource) -> &Availability {
        self.availability = randomize_occupancy(&self.inventory, source);
        self.last_booking = None;

        log::info!("Generated random occupancy: {} rooms free.", self.availability.available_count());

        &self.availability
    }

    /// Frees every room again and forgets the last booking and the history.
    pub fn reset(&mut self) {
        self.availability = Availability::from_inventory(&self.inventory);
        self.last_booking = None;
        self.history.clear();

        log::info!("Booking reset: all {} rooms free.", self.inventory.total_rooms());
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    pub fn last_booking(&self) -> Option<&BookingResult> {
        self.last_booking.as_ref()
    }

    pub fn history(&self) -> &BookingHistory {
        &self.history
    }

    pub fn max_rooms_per_booking(&self) -> i64 {
        self.max_rooms_per_booking
    }

    pub fn occupancy_grid(&self) -> Vec<FloorOccupancy> {
        self.availability.occupancy_grid(&self.inventory)
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new(Inventory::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::occupancy::ScriptedRandomSource;
    use crate::domain::room::{Floor, Room};

    #[test]
    fn consecutive_bookings_do_not_overlap() {
        let mut session = BookingSession::default();

        let first = session.book(5).rooms.clone();
        let second = session.book(5).rooms.clone();
        let third = session.book(2).rooms.clone();

        assert_eq!(first, (101..=105).map(Room).collect::<Vec<_>>());
        assert_eq!(second, (106..=110).map(Room).collect::<Vec<_>>());
        assert_eq!(third, vec![Room(201), Room(202)]);
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history().rooms_booked(), 12);
        assert_eq!(session.availability().available_count(), 85);
    }

    #[test]
    fn count_above_cap_is_limited() {
        let mut session = BookingSession::default().with_max_rooms_per_booking(3);

        let result = session.book(40);

        assert_eq!(result.requested, 3);
        assert_eq!(result.rooms.len(), 3);
    }

    #[test]
    fn non_positive_count_books_nothing() {
        let mut session = BookingSession::default();

        let result = session.book(0);

        assert!(result.is_empty());
        assert_eq!(session.availability().available_count(), 97);
        assert_eq!(session.history().records()[0].sequence, 1);
    }

    #[test]
    fn randomize_clears_last_booking() {
        let mut session = BookingSession::default();
        session.book(2);

        let mut source = ScriptedRandomSource::new([9]);
        session.randomize(&mut source);

        assert!(session.last_booking().is_none());
        assert_eq!(session.availability().rooms_on(Floor(1)), &[Room(110)]);
        assert_eq!(session.availability().rooms_on(Floor(2)).len(), 10);
    }

    #[test]
    fn reset_restores_inventory() {
        let mut session = BookingSession::default();
        session.book(4);
        session.randomize(&mut ScriptedRandomSource::new([3, 3, 3]));
        session.book(5);

        session.reset();

        assert_eq!(session.availability(), &Availability::from_inventory(session.inventory()));
        assert!(session.last_booking().is_none());
        assert!(session.history().is_empty());
    }
}
