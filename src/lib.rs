use crate::domain::inventory::Inventory;
use crate::domain::session::BookingSession;
use crate::error::Result;
use crate::loader::parser::load_inventory;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod utils;

pub use domain::availability::{Availability, remove_booked};
pub use domain::booking::{BookingResult, TravelTime, VERTICAL_TRAVEL_FACTOR, allocate};
pub use domain::occupancy::{RandomSource, RngSource, ScriptedRandomSource, randomize_occupancy};
pub use domain::room::{Floor, Room};

/// Builds a booking session from an inventory file, or from the standard hotel when no
/// file is given.
pub fn open_session(inventory_path: Option<&str>) -> Result<BookingSession> {
    let inventory = match inventory_path {
        Some(path) => {
            log::info!("Loading room inventory from '{}'...", path);
            load_inventory(path)?
        }
        None => Inventory::standard(),
    };

    log::info!("Inventory ready: {} floors, {} rooms.", inventory.floor_count(), inventory.total_rooms());

    Ok(BookingSession::new(inventory))
}
