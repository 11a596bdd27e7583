// Path: crates/types/src/app/timestamp.rs

//! Block timestamps and calendar-month arithmetic.

use crate::error::TimeError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, OffsetDateTime};

/// A UTC block timestamp in whole seconds since the unix epoch.
#[derive(
    Serialize,
    Deserialize,
    Encode,
    Decode,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Returns the timestamp as seconds since the unix epoch.
    pub fn unix_seconds(self) -> i64 {
        self.0
    }

    /// Returns the calendar date and time this timestamp denotes.
    pub fn to_datetime(self) -> Result<OffsetDateTime, TimeError> {
        OffsetDateTime::from_unix_timestamp(self.0).map_err(|_| TimeError::OutOfRange(self.0))
    }

    /// Adds `months` calendar months, keeping the time of day.
    ///
    /// A day-of-month that does not exist in the target month overflows into
    /// the following month, so January 31st plus one month is March 3rd in a
    /// common year.
    pub fn add_months(self, months: u32) -> Result<Self, TimeError> {
        let dt = self.to_datetime()?;
        let total = dt.year() as i64 * 12 + (dt.month() as i64 - 1) + months as i64;
        let year = i32::try_from(total.div_euclid(12)).map_err(|_| TimeError::Overflow)?;
        let month0 = u8::try_from(total.rem_euclid(12)).map_err(|_| TimeError::Overflow)?;
        let month = Month::try_from(month0 + 1).map_err(|_| TimeError::Overflow)?;

        let first = Date::from_calendar_date(year, month, 1).map_err(|_| TimeError::Overflow)?;
        let date = first
            .checked_add(Duration::days(dt.day() as i64 - 1))
            .ok_or(TimeError::Overflow)?;
        let shifted = dt.replace_date(date);
        Ok(Self(shifted.unix_timestamp()))
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(dt: OffsetDateTime) -> Self {
        Self(dt.unix_timestamp())
    }
}
