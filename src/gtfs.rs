use serde::{de::IgnoredAny, Deserialize};

#[derive(Deserialize, Debug)]
pub struct Stop {
    pub stop_id: String,
    pub _stop_code: IgnoredAny,
    pub stop_name: String,
}

#[derive(Deserialize, Debug)]
pub struct Route {
    pub route_id: String,
    pub _agency_id: IgnoredAny,
    pub route_name: String,
}

#[derive(Deserialize, Debug)]
pub struct Trip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
}

#[derive(Deserialize, Debug)]
pub struct StopTime {
    pub trip_id: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub stop_id: String,
    pub stop_sequence: u32,
}
