use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::{PlotError, PlotResult};

/// Race time parsed from an `MM:SS` string and anchored to midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn from_minutes_seconds(minutes: u32, seconds: u32) -> PlotResult<Self> {
        NaiveTime::from_hms_opt(0, minutes, seconds)
            .map(Self)
            .ok_or_else(|| PlotError::InvalidTime(format!("{minutes:02}:{seconds:02}")))
    }

    pub fn from_seconds_of_day(seconds: u32) -> PlotResult<Self> {
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
            .map(Self)
            .ok_or_else(|| {
                PlotError::InvalidData(format!("{seconds} seconds is outside a single day"))
            })
    }

    /// Parses `MM:SS` where each part has one or two digits and is below 60.
    pub fn parse(input: &str) -> PlotResult<Self> {
        let invalid = || PlotError::InvalidTime(input.to_owned());
        let (minutes, seconds) = input.split_once(':').ok_or_else(invalid)?;
        let minutes = parse_two_digit_field(minutes).ok_or_else(invalid)?;
        let seconds = parse_two_digit_field(seconds).ok_or_else(invalid)?;
        if minutes >= 60 || seconds >= 60 {
            return Err(invalid());
        }
        Self::from_minutes_seconds(minutes, seconds)
    }

    #[must_use]
    pub fn seconds_of_day(self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    #[must_use]
    pub fn second(self) -> u32 {
        self.0.second()
    }

    #[must_use]
    pub fn as_naive_time(self) -> NaiveTime {
        self.0
    }

    /// Formats as zero-padded `MM:SS`; the hour component is dropped.
    #[must_use]
    pub fn format_mm_ss(self) -> String {
        self.0.format("%M:%S").to_string()
    }
}

impl FromStr for TimeOfDay {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_mm_ss())
    }
}

fn parse_two_digit_field(raw: &str) -> Option<u32> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
