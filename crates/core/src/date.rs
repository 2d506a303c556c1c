//! Calendar date value object exchanged as `YYYY-MM-DD`.

use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// A calendar date (year, month, day) with no time-of-day component.
///
/// The textual form is strict: four year digits, two month digits and two day digits
/// separated by `-`. `2023-5-1` or `2023-05-01T00:00:00` are rejected even though a
/// lenient parser would accept them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventDate(NaiveDate);

impl ValueObject for EventDate {}

impl EventDate {
    /// Build a date from its parts, failing on impossible dates (e.g. February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "date: {year:04}-{month:02}-{day:02} is not a calendar date"
                ))
            })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Absolute distance in whole days between two dates.
    pub fn days_between(&self, other: &EventDate) -> i64 {
        self.0.signed_duration_since(other.0).num_days().abs()
    }

    /// Parse the strict `YYYY-MM-DD` representation.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(DomainError::validation(format!(
                "date: '{s}' is not in YYYY-MM-DD form"
            )));
        }

        // Digit groups were checked above, so these parses cannot fail.
        let year = s[0..4].parse::<i32>().unwrap_or_default();
        let month = s[5..7].parse::<u32>().unwrap_or_default();
        let day = s[8..10].parse::<u32>().unwrap_or_default();
        Self::from_ymd(year, month, day)
    }
}

impl core::fmt::Display for EventDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for EventDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EventDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EventDate> for String {
    fn from(value: EventDate) -> Self {
        value.to_string()
    }
}

impl From<NaiveDate> for EventDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}
