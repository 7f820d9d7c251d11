//! # Civil calendar arithmetic
//!
//! Proleptic Gregorian calendar rules on broken-down civil date/times.
//!
//! Years are numbered the civil way: there is no year 0, the year before 1 is −1.
//! [`CivilDateTime`] is an immutable value; every increment/decrement returns a new value
//! and carries into the larger fields (second → minute → hour → day → month → year).

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::orrery_errors::{DateField, OrreryError};

const SECONDS_PER_DAY: i64 = 86_400;

/// Astronomical number of a civil year: 1 BC is year 0, 2 BC is year −1.
pub(crate) fn astronomical_year(year: i32) -> i32 {
    if year < 0 {
        year + 1
    } else {
        year
    }
}

/// Return `true` if the civil `year` is a leap year of the proleptic Gregorian calendar.
///
/// A year is a leap year when it is divisible by 4 and either not divisible by 100
/// or divisible by 400. Years before 1 are tested on their astronomical number, so
/// 1 BC (−1) and 5 BC (−5) are leap years.
pub fn is_leap_year(year: i32) -> bool {
    let year = astronomical_year(year);
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days of `month` (1..=12) in `year`.
///
/// Returns 0 for a month outside `1..=12`.
pub fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn check_range(field: DateField, value: i32, low: i32, high: i32) -> Result<(), OrreryError> {
    if (low..=high).contains(&value) {
        Ok(())
    } else {
        Err(OrreryError::InvalidDate {
            field,
            value,
            reason: format!("outside [{low}, {high}]"),
        })
    }
}

fn check_year(year: i32) -> Result<(), OrreryError> {
    if year == 0 {
        return Err(OrreryError::InvalidDate {
            field: DateField::Year,
            value: year,
            reason: "there is no year 0".into(),
        });
    }

    // one year of margin so that seeds shifted by a day stay representable
    let (low, high) = (NaiveDate::MIN.year() + 1, NaiveDate::MAX.year() - 1);
    if !(low..=high).contains(&astronomical_year(year)) {
        return Err(OrreryError::InvalidDate {
            field: DateField::Year,
            value: year,
            reason: format!("outside the representable range [{}, {high}]", low - 1),
        });
    }
    Ok(())
}

/// Validate a civil date and time.
///
/// Arguments
/// ---------
/// * `year`: civil year, any value but 0 within the range chrono can represent
/// * `month`: 1..=12
/// * `day`: 1..=days_in_month(month, year)
/// * `hour`: 0..=23
/// * `minute`, `second`: 0..=59
///
/// Return
/// ------
/// * `Ok(())` if every field is valid, otherwise an [`OrreryError::InvalidDate`]
///   naming the first offending field and its value.
pub fn validate_date(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
) -> Result<(), OrreryError> {
    check_year(year)?;
    check_range(DateField::Month, month, 1, 12)?;
    check_range(DateField::Day, day, 1, days_in_month(month, year))?;
    check_range(DateField::Hour, hour, 0, 23)?;
    check_range(DateField::Minute, minute, 0, 59)?;
    check_range(DateField::Second, second, 0, 59)?;
    Ok(())
}

/// Broken-down civil date and time, without any time zone attached.
///
/// Ordering is lexicographic on (year, month, day, hour, minute, second), which is
/// chronological for valid values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl CivilDateTime {
    /// Build a civil date/time without validation.
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        CivilDateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Build a civil date/time, rejecting invalid fields with [`OrreryError::InvalidDate`].
    pub fn try_new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> Result<Self, OrreryError> {
        validate_date(year, month, day, hour, minute, second)?;
        Ok(Self::new(year, month, day, hour, minute, second))
    }

    pub fn validate(&self) -> Result<(), OrreryError> {
        validate_date(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    fn next_year(year: i32) -> i32 {
        if year == -1 {
            1
        } else {
            year.saturating_add(1)
        }
    }

    fn previous_year(year: i32) -> i32 {
        if year == 1 {
            -1
        } else {
            year.saturating_sub(1)
        }
    }

    fn first_of_next_month(self) -> Self {
        let (year, month) = if self.month >= 12 {
            (Self::next_year(self.year), 1)
        } else {
            (self.year, self.month + 1)
        };
        Self {
            year,
            month,
            day: 1,
            ..self
        }
    }

    fn last_of_previous_month(self) -> Self {
        let (year, month) = if self.month <= 1 {
            (Self::previous_year(self.year), 12)
        } else {
            (self.year, self.month - 1)
        };
        Self {
            year,
            month,
            day: days_in_month(month, year),
            ..self
        }
    }

    /// Move `quantity` days forward, walking month by month.
    ///
    /// A negative `quantity` moves backward.
    pub fn increment_day(self, quantity: i64) -> Self {
        if quantity < 0 {
            return self.decrement_day(-quantity);
        }

        let mut current = self;
        let mut remaining = quantity;
        while remaining > 0 {
            let left_in_month = i64::from(days_in_month(current.month, current.year) - current.day);
            if remaining <= left_in_month {
                current.day += remaining as i32;
                remaining = 0;
            } else {
                remaining -= left_in_month + 1;
                current = current.first_of_next_month();
            }
        }
        current
    }

    /// Move `quantity` days backward, walking month by month.
    ///
    /// A negative `quantity` moves forward.
    pub fn decrement_day(self, quantity: i64) -> Self {
        if quantity < 0 {
            return self.increment_day(-quantity);
        }

        let mut current = self;
        let mut remaining = quantity;
        while remaining > 0 {
            let day = i64::from(current.day);
            if remaining < day {
                current.day -= remaining as i32;
                remaining = 0;
            } else {
                remaining -= day;
                current = current.last_of_previous_month();
            }
        }
        current
    }

    fn carry_hours(self, total_hours: i64) -> Self {
        let shifted = Self {
            hour: total_hours.rem_euclid(24) as i32,
            ..self
        };
        shifted.increment_day(total_hours.div_euclid(24))
    }

    fn carry_minutes(self, total_minutes: i64) -> Self {
        let shifted = Self {
            minute: total_minutes.rem_euclid(60) as i32,
            ..self
        };
        shifted.increment_hour(total_minutes.div_euclid(60))
    }

    fn carry_seconds(self, total_seconds: i64) -> Self {
        let shifted = Self {
            second: total_seconds.rem_euclid(60) as i32,
            ..self
        };
        shifted.increment_minute(total_seconds.div_euclid(60))
    }

    pub fn increment_hour(self, quantity: i64) -> Self {
        if quantity < 0 {
            return self.decrement_hour(-quantity);
        }
        self.carry_hours(i64::from(self.hour) + quantity)
    }

    pub fn decrement_hour(self, quantity: i64) -> Self {
        if quantity < 0 {
            return self.increment_hour(-quantity);
        }
        self.carry_hours(i64::from(self.hour) - quantity)
    }

    pub fn increment_minute(self, quantity: i64) -> Self {
        if quantity < 0 {
            return self.decrement_minute(-quantity);
        }
        self.carry_minutes(i64::from(self.minute) + quantity)
    }

    pub fn decrement_minute(self, quantity: i64) -> Self {
        if quantity < 0 {
            return self.increment_minute(-quantity);
        }
        self.carry_minutes(i64::from(self.minute) - quantity)
    }

    pub fn increment_second(self, quantity: i64) -> Self {
        if quantity < 0 {
            return self.decrement_second(-quantity);
        }
        self.carry_seconds(i64::from(self.second) + quantity)
    }

    pub fn decrement_second(self, quantity: i64) -> Self {
        if quantity < 0 {
            return self.increment_second(-quantity);
        }
        self.carry_seconds(i64::from(self.second) - quantity)
    }

    /// Signed number of seconds from `self` to `other`, assuming both lie within one day
    /// of each other.
    ///
    /// Only the time-of-day fields are subtracted; the dates only decide the direction.
    /// The result is positive when `other` is later than `self`, e.g. 22:15:15 followed by
    /// 01:45:15 on the next day gives +12600 and not −73800.
    pub fn adj_day_secs_diff(&self, other: &CivilDateTime) -> i64 {
        let mut diff = i64::from(other.hour - self.hour) * 3600
            + i64::from(other.minute - self.minute) * 60
            + i64::from(other.second - self.second);

        if self > other && diff > 0 {
            diff -= SECONDS_PER_DAY;
        } else if self < other && diff < 0 {
            diff += SECONDS_PER_DAY;
        }
        diff
    }

    /// Convert to a chrono naive date/time.
    ///
    /// Civil years before 1 are shifted to astronomical numbering (−1 → 0).
    /// Returns `None` when the fields do not describe a real date/time.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(
            astronomical_year(self.year),
            u32::try_from(self.month).ok()?,
            u32::try_from(self.day).ok()?,
        )?
        .and_hms_opt(
            u32::try_from(self.hour).ok()?,
            u32::try_from(self.minute).ok()?,
            u32::try_from(self.second).ok()?,
        )
    }

    /// Build from a chrono naive date/time, mapping astronomical year 0 and below back
    /// to civil numbering.
    pub fn from_naive(naive: &NaiveDateTime) -> Self {
        let year = if naive.year() <= 0 {
            naive.year() - 1
        } else {
            naive.year()
        };
        Self::new(
            year,
            naive.month() as i32,
            naive.day() as i32,
            naive.hour() as i32,
            naive.minute() as i32,
            naive.second() as i32,
        )
    }
}
