use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A user-triggered transition of a [`BookingSession`](crate::domain::session::BookingSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Book the given number of rooms.
    Book(i64),
    /// Replace availability with a random occupancy.
    Randomize,
    /// Free all rooms.
    Reset,
    /// Display the current occupancy.
    Show,
}

impl FromStr for SessionAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "randomize" | "random" => Ok(SessionAction::Randomize),
            "reset" => Ok(SessionAction::Reset),
            "show" => Ok(SessionAction::Show),
            other => match other.strip_prefix("book:") {
                Some(count) => count.trim().parse::<i64>().map(SessionAction::Book).map_err(|_| Error::UnknownAction(s.to_string())),
                None => Err(Error::UnknownAction(s.to_string())),
            },
        }
    }
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionAction::Book(count) => write!(f, "book:{}", count),
            SessionAction::Randomize => write!(f, "randomize"),
            SessionAction::Reset => write!(f, "reset"),
            SessionAction::Show => write!(f, "show"),
        }
    }
}
