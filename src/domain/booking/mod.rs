pub mod allocator;
pub mod booking_history;
pub mod booking_result;
pub mod travel_time;

pub use allocator::allocate;
pub use booking_history::{BookingHistory, BookingRecord};
pub use booking_result::BookingResult;
pub use travel_time::{TravelTime, VERTICAL_TRAVEL_FACTOR};
