use std::io;

use tracing_subscriber::EnvFilter;

mod cli;
mod data;
mod departures;
mod error;
mod gtfs;
mod loader;
mod time;
mod timetable;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    cli::run_from(std::env::args_os(), &mut stdout.lock())
}
