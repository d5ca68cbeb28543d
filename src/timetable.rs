use std::collections::HashMap;

use tracing::{info, warn};

use crate::data::*;
use crate::loader::{self, Loaded};

pub const UNKNOWN_ROUTE: &str = "Nepoznato";

#[derive(Debug, Default)]
pub struct Timetable {
    pub stops: HashMap<String, String>,
    pub routes: HashMap<String, String>,
    pub trips: HashMap<String, TripInfo>,
    pub stop_times: Vec<StopTime>,
}

fn report<T>(table: &str, loaded: Loaded<T>, len: impl Fn(&T) -> usize) -> T {
    if let Some(err) = &loaded.error {
        warn!(
            table,
            error = %err,
            cause = ?std::error::Error::source(err),
            "Failed to load table, continuing with partial data"
        );
    }
    info!(table, count = len(&loaded.table), "Loaded table");
    loaded.table
}

impl Timetable {
    pub fn load(paths: &FeedPaths) -> Self {
        Self {
            stops: report("stops", loader::load_stops(&paths.stops), HashMap::len),
            routes: report("routes", loader::load_routes(&paths.routes), HashMap::len),
            trips: report("trips", loader::load_trips(&paths.trips), HashMap::len),
            stop_times: report(
                "stop_times",
                loader::load_stop_times(&paths.stop_times),
                Vec::len,
            ),
        }
    }

    pub fn stop_name(&self, stop_id: &str) -> Option<&str> {
        self.stops.get(stop_id).map(String::as_str)
    }

    pub fn trip(&self, trip_id: &str) -> Option<&TripInfo> {
        self.trips.get(trip_id)
    }

    pub fn route_name(&self, route_id: &str) -> &str {
        self.routes
            .get(route_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_ROUTE)
    }
}
