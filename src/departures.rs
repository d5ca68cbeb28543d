use chrono::{Duration, NaiveTime};
use itertools::Itertools;
use tracing::warn;

use crate::data::StopTime;
use crate::timetable::Timetable;

pub const LOOKAHEAD_HOURS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival<'a> {
    pub stop_time: &'a StopTime,
    pub at: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure<'a> {
    pub route_name: &'a str,
    pub at: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Absolute,
    Relative,
}

impl DisplayMode {
    /// `relative` in any letter case selects relative mode, anything else
    /// is absolute.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("relative") {
            Self::Relative
        } else {
            Self::Absolute
        }
    }
}

// The window end wraps past midnight, so a window opening after 22:00
// matches nothing. Arrivals at 24:00:00 or later never match.
pub fn upcoming<'a>(
    stop_times: &'a [StopTime],
    stop_id: &str,
    now: NaiveTime,
) -> Vec<Arrival<'a>> {
    let (end, _) = now.overflowing_add_signed(Duration::hours(LOOKAHEAD_HOURS));

    stop_times
        .iter()
        .filter(|stop_time| stop_time.stop_id == stop_id)
        .filter_map(|stop_time| {
            Some(Arrival {
                stop_time,
                at: stop_time.arrival_time?.time_of_day()?,
            })
        })
        .filter(|arrival| arrival.at > now && arrival.at < end)
        .sorted_by_key(|arrival| arrival.at)
        .collect()
}

pub fn departures<'a>(timetable: &'a Timetable, arrivals: &[Arrival<'_>]) -> Vec<Departure<'a>> {
    arrivals
        .iter()
        .filter_map(|arrival| {
            let trip_id = &arrival.stop_time.trip_id;
            let Some(trip) = timetable.trip(trip_id) else {
                warn!(trip_id = %trip_id, "Skipping stop time of unknown trip");
                return None;
            };

            Some(Departure {
                route_name: timetable.route_name(&trip.route_id),
                at: arrival.at,
            })
        })
        .collect()
}

impl Departure<'_> {
    pub fn render(&self, mode: DisplayMode, now: NaiveTime) -> String {
        match mode {
            DisplayMode::Absolute => {
                format!("{}: {}", self.route_name, self.at.format("%H:%M:%S"))
            }
            DisplayMode::Relative => format!(
                "{}: {}min",
                self.route_name,
                self.at.signed_duration_since(now).num_minutes()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TripInfo;
    use crate::time::ScheduleTime;
    use crate::timetable::UNKNOWN_ROUTE;

    fn hms(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
    }

    fn stop_time(trip_id: &str, arrival: &str, stop_id: &str) -> StopTime {
        let arrival_time = arrival.parse::<ScheduleTime>().ok();
        StopTime {
            trip_id: trip_id.to_owned(),
            arrival_time,
            departure_time: arrival_time,
            stop_id: stop_id.to_owned(),
            stop_sequence: 1,
        }
    }

    fn times(arrivals: &[Arrival<'_>]) -> Vec<String> {
        arrivals
            .iter()
            .map(|arrival| arrival.at.format("%H:%M:%S").to_string())
            .collect()
    }

    fn timetable() -> Timetable {
        let mut timetable = Timetable::default();
        timetable.routes.insert("R1".to_owned(), "Route 1".to_owned());
        for (trip_id, route_id) in [("T1", "R1"), ("T2", "R1"), ("T3", "R404")] {
            timetable.trips.insert(
                trip_id.to_owned(),
                TripInfo {
                    route_id: route_id.to_owned(),
                    service_id: "SVC1".to_owned(),
                },
            );
        }
        timetable
    }

    #[test]
    fn keeps_only_the_stop_within_the_open_window() {
        let stop_times = vec![
            stop_time("T1", "08:00:00", "S1"),
            stop_time("T1", "08:00:01", "S1"),
            stop_time("T1", "08:30:00", "S2"),
            stop_time("T1", "09:59:59", "S1"),
            stop_time("T1", "10:00:00", "S1"),
            stop_time("T1", "07:59:00", "S1"),
        ];

        let arrivals = upcoming(&stop_times, "S1", hms("08:00:00"));
        assert_eq!(times(&arrivals), ["08:00:01", "09:59:59"]);
    }

    #[test]
    fn sorts_by_arrival_and_keeps_feed_order_for_ties() {
        let stop_times = vec![
            stop_time("T2", "09:30:00", "S1"),
            stop_time("T3", "08:10:00", "S1"),
            stop_time("T1", "09:30:00", "S1"),
            stop_time("T1", "8:20:00", "S1"),
        ];

        let arrivals = upcoming(&stop_times, "S1", hms("08:00:00"));
        assert_eq!(
            times(&arrivals),
            ["08:10:00", "08:20:00", "09:30:00", "09:30:00"]
        );
        assert_eq!(arrivals[2].stop_time.trip_id, "T2");
        assert_eq!(arrivals[3].stop_time.trip_id, "T1");
    }

    #[test]
    fn skips_missing_and_overnight_arrivals() {
        let stop_times = vec![
            stop_time("T1", "", "S1"),
            stop_time("T1", "24:15:00", "S1"),
            stop_time("T1", "21:45:00", "S1"),
        ];

        let arrivals = upcoming(&stop_times, "S1", hms("20:00:00"));
        assert_eq!(times(&arrivals), ["21:45:00"]);
    }

    #[test]
    fn window_wrapping_past_midnight_matches_nothing() {
        let stop_times = vec![
            stop_time("T1", "23:45:00", "S1"),
            stop_time("T1", "00:15:00", "S1"),
        ];

        assert!(upcoming(&stop_times, "S1", hms("23:30:00")).is_empty());
    }

    #[test]
    fn resolves_routes_with_fallback_and_skips_unknown_trips() {
        let timetable = timetable();
        let stop_times = vec![
            stop_time("T1", "08:10:00", "S1"),
            stop_time("T9", "08:20:00", "S1"),
            stop_time("T3", "08:30:00", "S1"),
            stop_time("T2", "08:40:00", "S1"),
        ];
        let arrivals = upcoming(&stop_times, "S1", hms("08:00:00"));

        let departures = departures(&timetable, &arrivals);
        let names: Vec<_> = departures.iter().map(|d| d.route_name).collect();
        assert_eq!(names, ["Route 1", UNKNOWN_ROUTE, "Route 1"]);
    }

    #[test]
    fn renders_both_modes_consistently() {
        let departure = Departure {
            route_name: "Route 1",
            at: hms("08:15:00"),
        };
        let now = hms("08:00:00");

        assert_eq!(
            departure.render(DisplayMode::Absolute, now),
            "Route 1: 08:15:00"
        );
        assert_eq!(departure.render(DisplayMode::Relative, now), "Route 1: 15min");
    }

    #[test]
    fn relative_minutes_are_truncated() {
        let departure = Departure {
            route_name: "6",
            at: hms("08:15:00"),
        };
        let now = NaiveTime::from_hms_milli_opt(8, 0, 30, 500).unwrap();

        assert_eq!(departure.render(DisplayMode::Relative, now), "6: 14min");
    }

    #[test]
    fn mode_token_is_case_insensitive() {
        assert_eq!(DisplayMode::from_token("RELATIVE"), DisplayMode::Relative);
        assert_eq!(DisplayMode::from_token("Relative"), DisplayMode::Relative);
        assert_eq!(DisplayMode::from_token("absolute"), DisplayMode::Absolute);
        assert_eq!(DisplayMode::from_token("whatever"), DisplayMode::Absolute);
    }
}
