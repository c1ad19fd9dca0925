//! # Local Week Numbering
//!
//! Clinics number the days of the week starting from Saturday. The Gregorian
//! calendar's last weekday (Saturday) becomes local day 0 and every other day
//! moves up by one, so Sunday is 1 and Friday is 6.
//!
//! Date-range scans must call [`local_weekday`] for each day instead of
//! assuming a fixed offset from the ISO weekday.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::ClinicError;

/// Day of week in the clinic's own numbering, Saturday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalDayOfWeek {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl LocalDayOfWeek {
    pub const ALL: [LocalDayOfWeek; 7] = [
        LocalDayOfWeek::Saturday,
        LocalDayOfWeek::Sunday,
        LocalDayOfWeek::Monday,
        LocalDayOfWeek::Tuesday,
        LocalDayOfWeek::Wednesday,
        LocalDayOfWeek::Thursday,
        LocalDayOfWeek::Friday,
    ];

    /// Ordinal in the local numbering (0..=6).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Maps a Gregorian weekday into the local numbering.
    pub fn from_gregorian(weekday: Weekday) -> Self {
        match weekday {
            // Last day of the Gregorian week opens the local one.
            Weekday::Sat => LocalDayOfWeek::Saturday,
            other => Self::ALL[other.num_days_from_sunday() as usize + 1],
        }
    }

    /// Inverse of [`LocalDayOfWeek::from_gregorian`].
    pub fn to_gregorian(self) -> Weekday {
        match self {
            LocalDayOfWeek::Saturday => Weekday::Sat,
            LocalDayOfWeek::Sunday => Weekday::Sun,
            LocalDayOfWeek::Monday => Weekday::Mon,
            LocalDayOfWeek::Tuesday => Weekday::Tue,
            LocalDayOfWeek::Wednesday => Weekday::Wed,
            LocalDayOfWeek::Thursday => Weekday::Thu,
            LocalDayOfWeek::Friday => Weekday::Fri,
        }
    }
}

impl TryFrom<i16> for LocalDayOfWeek {
    type Error = ClinicError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| ClinicError::Validation(format!("Invalid day of week: {}", value)))
    }
}

impl From<LocalDayOfWeek> for i16 {
    fn from(day: LocalDayOfWeek) -> Self {
        day.ordinal() as i16
    }
}

impl fmt::Display for LocalDayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Local weekday of a Gregorian date.
pub fn local_weekday(date: NaiveDate) -> LocalDayOfWeek {
    LocalDayOfWeek::from_gregorian(date.weekday())
}
