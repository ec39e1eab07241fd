pub mod action;
pub mod availability;
pub mod booking;
pub mod inventory;
pub mod occupancy;
pub mod room;
pub mod session;
