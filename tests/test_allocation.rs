use hotel_room_booking::domain::inventory::Inventory;
use hotel_room_booking::domain::session::BookingSession;
use hotel_room_booking::{Availability, Floor, Room, RngSource, ScriptedRandomSource, allocate, randomize_occupancy, remove_booked};

fn rooms(numbers: &[u32]) -> Vec<Room> {
    numbers.iter().copied().map(Room).collect()
}

fn full_availability() -> Availability {
    Availability::from_inventory(&Inventory::standard())
}

/// Floor 1 has only 110 left, every other floor is free.
fn availability_with_floor_one_nearly_booked() -> Availability {
    full_availability().remove_booked(&rooms(&[101, 102, 103, 104, 105, 106, 107, 108, 109]))
}

#[test]
fn test_three_rooms_on_one_floor() {
    let result = allocate(&full_availability(), 3);

    assert_eq!(result.rooms, rooms(&[101, 102, 103]));
    assert_eq!(result.travel_time.horizontal, 2);
    assert_eq!(result.travel_time.vertical, 0);
    assert_eq!(result.total_travel_time(), 2);
}

#[test]
fn test_booking_spills_to_next_floor() {
    let availability = availability_with_floor_one_nearly_booked();

    let result = allocate(&availability, 3);

    assert_eq!(result.rooms, rooms(&[110, 201, 202]));
    assert_eq!(result.floors_used, vec![Floor(1), Floor(2)]);
    assert_eq!(result.travel_time.horizontal, 9);
    assert_eq!(result.travel_time.vertical, 2);
    assert_eq!(result.total_travel_time(), 11);
}

#[test]
fn test_single_room_has_no_travel_time() {
    let mut source = RngSource::seeded(11);
    for _ in 0..20 {
        let availability = randomize_occupancy(&Inventory::standard(), &mut source);
        let result = allocate(&availability, 1);

        assert_eq!(result.rooms.len(), 1);
        assert_eq!(result.total_travel_time(), 0);
    }
}

#[test]
fn test_non_positive_count_is_empty() {
    for count in [0, -1, -5] {
        let result = allocate(&full_availability(), count);
        assert!(result.rooms.is_empty());
        assert_eq!(result.total_travel_time(), 0);
    }
}

#[test]
fn test_oversized_request_takes_everything() {
    let availability = Availability::from_floors(vec![(Floor(3), rooms(&[309, 310])), (Floor(7), rooms(&[705])), (Floor(8), vec![])]);

    let result = allocate(&availability, 5);

    assert_eq!(result.rooms, rooms(&[309, 310, 705]));
    assert!(result.is_partial());

    let everything = allocate(&full_availability(), 1_000);
    assert_eq!(everything.rooms.len(), 97);
}

#[test]
fn test_allocate_does_not_mutate_availability() {
    let availability = availability_with_floor_one_nearly_booked();
    let before = availability.clone();

    let _ = allocate(&availability, 4);

    assert_eq!(availability, before);
}

#[test]
fn test_rooms_follow_floor_then_corridor_order() {
    let inventory = Inventory::standard();
    let mut source = RngSource::seeded(2024);

    for _ in 0..25 {
        let availability = randomize_occupancy(&inventory, &mut source);
        let result = allocate(&availability, 25);

        let floors: Vec<Floor> = result.rooms.iter().map(|room| room.floor()).collect();
        assert!(floors.windows(2).all(|pair| pair[0] <= pair[1]), "floors out of order: {:?}", floors);

        for floor in &result.floors_used {
            let booked_here: Vec<Room> = result.rooms.iter().copied().filter(|room| room.floor() == *floor).collect();
            let free_here = availability.rooms_on(*floor);
            assert_eq!(booked_here.as_slice(), &free_here[..booked_here.len()]);
        }
    }
}

#[test]
fn test_remove_booked_is_idempotent() {
    let availability = availability_with_floor_one_nearly_booked();
    let booked = allocate(&availability, 3).rooms;

    let once = remove_booked(&availability, &booked);
    let twice = remove_booked(&once, &booked);

    assert_eq!(once, twice);
    assert!(once.is_consistent_with(&Inventory::standard()));
    assert!(booked.iter().all(|room| !once.is_available(*room)));
}

#[test]
fn test_randomized_floors_are_inventory_suffixes() {
    let inventory = Inventory::standard();
    let mut source = RngSource::seeded(99);

    for _ in 0..50 {
        let availability = randomize_occupancy(&inventory, &mut source);

        for (floor, free) in availability.iter() {
            let all = inventory.rooms_on(*floor);
            assert!(!free.is_empty(), "floor {} lost every room", floor);
            assert_eq!(free.as_slice(), &all[all.len() - free.len()..]);
        }
    }
}

#[test]
fn test_randomize_ignores_previous_availability() {
    let inventory = Inventory::standard();
    let script = [2, 4, 6, 8, 0, 1, 3, 5, 7, 6];

    let from_fresh = randomize_occupancy(&inventory, &mut ScriptedRandomSource::new(script));
    let mut session = BookingSession::new(inventory.clone());
    session.book(5);
    session.book(5);
    let from_session = session.randomize(&mut ScriptedRandomSource::new(script)).clone();

    assert_eq!(from_fresh, from_session);
}

#[test]
fn test_reset_restores_inventory() {
    let mut session = BookingSession::default();
    let mut source = RngSource::seeded(5);

    session.book(3);
    session.randomize(&mut source);
    session.book(5);
    session.book(2);
    session.randomize(&mut source);
    session.book(4);
    assert!(session.last_booking().is_some());

    session.reset();

    assert_eq!(session.availability(), &Availability::from_inventory(&Inventory::standard()));
    assert!(session.last_booking().is_none());
}
