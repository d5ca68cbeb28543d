use std::path::{Path, PathBuf};

use crate::time::ScheduleTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripInfo {
    pub route_id: String,
    #[allow(dead_code)]
    pub service_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTime {
    pub trip_id: String,
    pub arrival_time: Option<ScheduleTime>,
    #[allow(dead_code)]
    pub departure_time: Option<ScheduleTime>,
    pub stop_id: String,
    #[allow(dead_code)]
    pub stop_sequence: u32,
}

#[derive(Debug, Clone)]
pub struct FeedPaths {
    pub stops: PathBuf,
    pub routes: PathBuf,
    pub trips: PathBuf,
    pub stop_times: PathBuf,
}

impl FeedPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            stops: dir.join("stops.txt"),
            routes: dir.join("routes.txt"),
            trips: dir.join("trips.txt"),
            stop_times: dir.join("stop_times.txt"),
        }
    }
}
