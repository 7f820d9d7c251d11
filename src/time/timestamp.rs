use std::fmt;
use std::ops::Sub;

use chrono::{DateTime, Local, Utc};
use hifitime::Epoch;
use serde::Serialize;

use crate::constants::{
    Seconds, DAYS_PER_JULIAN_CENTURY, EPOCH_J2000, SECONDS_PER_DAY, UNIX_J2000,
};
use crate::orrery_errors::OrreryError;

use super::calendar::{validate_date, CivilDateTime};
use super::resolve::UtcResolver;

/// An absolute instant, counted in whole seconds since 1970-01-01T00:00:00 UTC.
///
/// Timestamps are totally ordered; subtracting two of them gives the signed elapsed time
/// in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_unix(seconds: i64) -> Self {
        Timestamp(seconds)
    }

    pub const fn unix_seconds(self) -> i64 {
        self.0
    }

    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// Decode the instant into UTC civil fields.
    ///
    /// Returns `None` only for instants outside the range chrono can represent.
    pub fn to_civil(self) -> Option<CivilDateTime> {
        self.to_datetime()
            .map(|dt| CivilDateTime::from_naive(&dt.naive_utc()))
    }

    /// Julian Date of the instant (UTC, no leap second correction).
    pub fn julian_date(self) -> f64 {
        EPOCH_J2000 + (self.0 - UNIX_J2000) as f64 / SECONDS_PER_DAY
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn julian_centuries(self) -> f64 {
        (self.julian_date() - EPOCH_J2000) / DAYS_PER_JULIAN_CENTURY
    }

    /// Days elapsed since `epoch`, negative before it.
    pub fn days_since(self, epoch: Timestamp) -> f64 {
        (self - epoch) / SECONDS_PER_DAY
    }

    /// Long form, e.g. `Saturday August 10, 2013 00:34:00 UTC`.
    pub fn time_string(self) -> String {
        match self.to_datetime() {
            Some(dt) => dt.format("%A %B %d, %Y %H:%M:%S UTC").to_string(),
            None => format!("@{} UTC", self.0),
        }
    }

    /// RFC 3339 form, e.g. `2013-08-10T00:34:00Z`.
    pub fn time_string_inet(self) -> String {
        match self.to_datetime() {
            Some(dt) => dt.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            None => format!("@{}", self.0),
        }
    }

    /// Convert to a hifitime [`Epoch`] in the UTC time scale.
    pub fn to_epoch(self) -> Epoch {
        Epoch::from_unix_seconds(self.0 as f64)
    }

    /// Convert from a hifitime [`Epoch`], rounding to the nearest second.
    pub fn from_epoch(epoch: Epoch) -> Self {
        Timestamp(epoch.to_unix_seconds().round() as i64)
    }
}

impl Sub for Timestamp {
    type Output = Seconds;

    fn sub(self, rhs: Self) -> Self::Output {
        (self.0 - rhs.0) as f64
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.time_string_inet())
    }
}

/// Timestamp of a civil date and time read as UTC.
///
/// The fields are validated first, then resolved through the host's local time zone
/// with [`UtcResolver`].
///
/// Arguments
/// ---------
/// * `year`, `month`, `day`, `hour`, `minute`, `second`: civil UTC fields, see
///   [`validate_date`] for the accepted ranges
///
/// Return
/// ------
/// * the matching [`Timestamp`], [`OrreryError::InvalidDate`] for invalid fields or
///   [`OrreryError::TimeResolution`] if no instant decodes back to the requested fields
pub fn resolve_utc_timestamp(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
) -> Result<Timestamp, OrreryError> {
    validate_date(year, month, day, hour, minute, second)?;
    let civil = CivilDateTime::new(year, month, day, hour, minute, second);
    UtcResolver::new(Local).resolve(&civil)
}

/// Current instant, read from the host clock.
pub fn current_timestamp() -> Timestamp {
    Timestamp(Utc::now().timestamp())
}
