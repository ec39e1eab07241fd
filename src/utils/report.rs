use std::fs::File;
use std::io::Write;

use crate::domain::booking::BookingHistory;
use crate::domain::room::join_rooms;
use crate::error::Result;

/// Column order of the booking report.
pub const REPORT_HEADERS: [&str; 7] = ["sequence", "requested", "booked", "rooms", "horizontal", "vertical", "travel_time"];

/// Writes one `;`-separated row per booking, preceded by [`REPORT_HEADERS`].
pub fn write_report<W: Write>(writer: W, history: &BookingHistory) -> Result<()> {
    let mut csv_wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

    csv_wtr.write_record(REPORT_HEADERS)?;

    for record in history.records() {
        let result = &record.result;
        csv_wtr.write_record([
            record.sequence.to_string(),
            result.requested.to_string(),
            result.rooms.len().to_string(),
            join_rooms(&result.rooms, ","),
            result.travel_time.horizontal.to_string(),
            result.travel_time.vertical.to_string(),
            result.total_travel_time().to_string(),
        ])?;
    }

    csv_wtr.flush()?;
    Ok(())
}

/// Writes the booking report to `file_path`, replacing an existing file.
pub fn write_report_file(file_path: &str, history: &BookingHistory) -> Result<()> {
    let file = File::create(file_path)?;
    write_report(file, history)?;

    log::info!("Wrote {} bookings to report '{}'.", history.len(), file_path);
    Ok(())
}
