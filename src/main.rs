use clap::Parser;
use colored::Colorize;

use hotel_room_booking::domain::action::SessionAction;
use hotel_room_booking::domain::occupancy::RandomSource;
use hotel_room_booking::domain::room::join_rooms;
use hotel_room_booking::domain::session::{BookingSession, DEFAULT_MAX_ROOMS_PER_BOOKING};
use hotel_room_booking::utils::report::write_report_file;
use hotel_room_booking::{RngSource, logger, open_session};

/// Headless driver for the hotel room booking simulator.
#[derive(Debug, Parser)]
#[command(name = "hotel-booking", version, about)]
struct Cli {
    /// JSON room inventory. Uses the standard 10-floor hotel when omitted.
    #[arg(long)]
    inventory: Option<String>,

    /// Seed for random occupancy. Uses the thread RNG when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum rooms per booking request.
    #[arg(long, default_value_t = DEFAULT_MAX_ROOMS_PER_BOOKING)]
    max_rooms: i64,

    /// Write a CSV report of all bookings to this file when done.
    #[arg(long)]
    report: Option<String>,

    /// Log level (error, warn, info, debug, trace). Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Actions to run in order: book:<n>, randomize, reset, show.
    #[arg(value_name = "ACTION")]
    actions: Vec<SessionAction>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init(logger::resolve_level(cli.log_level.as_deref()));

    let mut session = open_session(cli.inventory.as_deref())?.with_max_rooms_per_booking(cli.max_rooms);

    let mut random_source: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => {
            log::info!("Random occupancy seeded with {}.", seed);
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::thread()),
    };

    let actions = if cli.actions.is_empty() { vec![SessionAction::Show] } else { cli.actions };

    for action in actions {
        log::debug!("Running action '{}'.", action);
        match action {
            SessionAction::Book(count) => {
                let result = session.book(count);
                println!("{}", "Booking Details".bold());
                println!("Rooms Booked: {}", join_rooms(&result.rooms, ", "));
                println!("Total Travel Time: {}", result.travel_time);
            }
            SessionAction::Randomize => {
                session.randomize(random_source.as_mut());
                println!("Generated random occupancy.");
            }
            SessionAction::Reset => {
                session.reset();
                println!("Booking reset.");
            }
            SessionAction::Show => print_occupancy(&session),
        }
    }

    if let Some(report_path) = cli.report.as_deref() {
        write_report_file(report_path, session.history())?;
    }

    Ok(())
}

fn print_occupancy(session: &BookingSession) {
    println!("{}", "Available Rooms".bold());

    for floor in session.occupancy_grid() {
        let cells: Vec<String> = floor
            .rooms
            .iter()
            .map(|status| {
                let label = format!("{:>4}", status.room);
                if status.available { label.green().to_string() } else { label.red().to_string() }
            })
            .collect();

        println!("Floor {:>2} ({:>2} free): {}", floor.floor, floor.available_count(), cells.join(" "));
    }
}
