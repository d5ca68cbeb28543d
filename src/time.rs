use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

use crate::error::TimeError;

// Seconds since service-day midnight; hours may exceed 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleTime(u32);

impl ScheduleTime {
    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self(hours * 3600 + minutes * 60 + seconds)
    }

    /// `None` for times at or past 24:00:00.
    pub fn time_of_day(self) -> Option<NaiveTime> {
        NaiveTime::from_num_seconds_from_midnight_opt(self.0, 0)
    }
}

impl FromStr for ScheduleTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mk_err = || TimeError(s.to_owned());

        let mut parts = s.trim().split(':');
        let hours = parts.next().ok_or_else(mk_err)?;
        let minutes = parts.next().ok_or_else(mk_err)?;
        let seconds = parts.next().ok_or_else(mk_err)?;
        if parts.next().is_some() || minutes.len() != 2 || seconds.len() != 2 {
            return Err(mk_err());
        }

        let hours: u32 = hours.parse().map_err(|_| mk_err())?;
        let minutes: u32 = minutes.parse().map_err(|_| mk_err())?;
        let seconds: u32 = seconds.parse().map_err(|_| mk_err())?;
        if hours > 99 || minutes > 59 || seconds > 59 {
            return Err(mk_err());
        }

        Ok(Self::from_hms(hours, minutes, seconds))
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.0 / 3600,
            self.0 % 3600 / 60,
            self.0 % 60
        )
    }
}

pub fn parse_optional(s: &str) -> Result<Option<ScheduleTime>, TimeError> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}
