use std::{collections::HashMap, path::Path};

use serde::de::DeserializeOwned;

use crate::data::{StopTime, TripInfo};
use crate::error::LoadError;
use crate::{gtfs, time};

#[derive(Debug)]
pub struct Loaded<T> {
    pub table: T,
    pub error: Option<LoadError>,
}

impl<T> Loaded<T> {
    fn from_run(table: T, run: Result<(), LoadError>) -> Self {
        Self {
            table,
            error: run.err(),
        }
    }
}

fn row_error(path: &Path, source: csv::Error) -> LoadError {
    LoadError::Row {
        file: path.to_owned(),
        line: source.position().map(|position| position.line()),
        source,
    }
}

fn for_each_row<T, F>(path: &Path, mut on_row: F) -> Result<(), LoadError>
where
    T: DeserializeOwned,
    F: FnMut(T, Option<u64>) -> Result<(), LoadError>,
{
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            file: path.to_owned(),
            source,
        })?;

    for record in reader.records() {
        let record = record.map_err(|source| row_error(path, source))?;
        let line = record.position().map(|position| position.line());
        let row = record
            .deserialize(None)
            .map_err(|source| row_error(path, source))?;
        on_row(row, line)?;
    }

    Ok(())
}

pub fn load_stops(path: &Path) -> Loaded<HashMap<String, String>> {
    let mut stops = HashMap::new();
    let run = for_each_row(path, |stop: gtfs::Stop, _| {
        stops.insert(stop.stop_id, stop.stop_name);
        Ok(())
    });
    Loaded::from_run(stops, run)
}

pub fn load_routes(path: &Path) -> Loaded<HashMap<String, String>> {
    let mut routes = HashMap::new();
    let run = for_each_row(path, |route: gtfs::Route, _| {
        routes.insert(route.route_id, route.route_name);
        Ok(())
    });
    Loaded::from_run(routes, run)
}

pub fn load_trips(path: &Path) -> Loaded<HashMap<String, TripInfo>> {
    let mut trips = HashMap::new();
    let run = for_each_row(path, |trip: gtfs::Trip, _| {
        trips.insert(
            trip.trip_id,
            TripInfo {
                route_id: trip.route_id,
                service_id: trip.service_id,
            },
        );
        Ok(())
    });
    Loaded::from_run(trips, run)
}

pub fn load_stop_times(path: &Path) -> Loaded<Vec<StopTime>> {
    let mut stop_times = Vec::new();
    let run = for_each_row(path, |stop_time: gtfs::StopTime, line| {
        let parse = |value: &str| {
            time::parse_optional(value).map_err(|err| LoadError::InvalidTime {
                file: path.to_owned(),
                line,
                value: err.0,
            })
        };

        stop_times.push(StopTime {
            arrival_time: parse(&stop_time.arrival_time)?,
            departure_time: parse(&stop_time.departure_time)?,
            trip_id: stop_time.trip_id,
            stop_id: stop_time.stop_id,
            stop_sequence: stop_time.stop_sequence,
        });
        Ok(())
    });
    Loaded::from_run(stop_times, run)
}
