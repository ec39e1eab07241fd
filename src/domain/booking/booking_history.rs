use serde::Serialize;

use crate::domain::booking::booking_result::BookingResult;

/// One applied booking, numbered in the order it was made within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    pub sequence: usize,
    pub result: BookingResult,
}

/// Append-only log of the bookings applied since the last reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingHistory {
    records: Vec<BookingRecord>,
}

impl BookingHistory {
    pub fn new() -> Self {
        BookingHistory { records: Vec::new() }
    }

    pub fn record(&mut self, result: BookingResult) -> &BookingRecord {
        let sequence = self.records.len() + 1;
        self.records.push(BookingRecord { sequence, result });
        &self.records[sequence - 1]
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rooms_booked(&self) -> usize {
        self.records.iter().map(|record| record.result.rooms.len()).sum()
    }
}
