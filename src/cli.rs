use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveTime};
use clap::{error::ErrorKind, Parser};
use tracing::debug;

use crate::data::FeedPaths;
use crate::departures::{self, DisplayMode};
use crate::timetable::Timetable;

pub const USAGE: &str = "Usage: stop-board <stop_id> <number_of_buses> <relative|absolute>";

/// Upcoming departures at a transit stop, read from a GTFS feed.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Stop to report departures for, as in stops.txt
    pub stop_id: String,

    /// Maximum number of departures to print
    #[arg(allow_negative_numbers = true)]
    pub number_of_buses: i64,

    /// `relative` for minutes until arrival, anything else for clock times
    pub mode: String,

    /// Directory holding stops.txt, routes.txt, trips.txt and stop_times.txt
    #[arg(long, default_value = "gtfs")]
    pub gtfs_dir: PathBuf,

    /// Use this time of day (HH:MM:SS) instead of the local clock
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveTime>,
}

fn parse_now(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
}

pub fn run_from<I, T>(args: I, out: &mut impl Write) -> io::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => run(&cli, out),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", err.render())
        }
        Err(err) => {
            debug!(error = %err, "Rejected arguments");
            writeln!(out, "{USAGE}")
        }
    }
}

pub fn run(cli: &Cli, out: &mut impl Write) -> io::Result<()> {
    let paths = FeedPaths::in_dir(&cli.gtfs_dir);
    debug!(?paths, "Loading timetable");
    let timetable = Timetable::load(&paths);

    let Some(stop_name) = timetable.stop_name(&cli.stop_id) else {
        writeln!(out, "Unknown stop ID: {}", cli.stop_id)?;
        return Ok(());
    };
    writeln!(out, "Postaja: {stop_name}")?;

    let now = cli.now.unwrap_or_else(|| Local::now().time());
    writeln!(out, "Current time: {}", now.format("%H:%M:%S"))?;

    let arrivals = departures::upcoming(&timetable.stop_times, &cli.stop_id, now);
    let departures = departures::departures(&timetable, &arrivals);
    debug!(
        arrivals = arrivals.len(),
        departures = departures.len(),
        "Filtered stop times"
    );

    if departures.is_empty() {
        return writeln!(out, "No upcoming buses found.");
    }

    let mode = DisplayMode::from_token(&cli.mode);
    let limit = usize::try_from(cli.number_of_buses).unwrap_or(0);
    for departure in departures.iter().take(limit) {
        writeln!(out, "{}", departure.render(mode, now))?;
    }

    Ok(())
}
