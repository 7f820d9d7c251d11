//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, and **common type
//! aliases** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Reference epochs (J2000 for the planets, 1999-12-31 00:00 UTC for the lunar theory)
//! - Unit conversions (degrees ↔ radians, days ↔ seconds, days ↔ Julian centuries)
//! - The fixed obliquity of the ecliptic used by the equatorial rotation
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const EPOCH_J2000: f64 = 2_451_545.0;

/// Unix timestamp of the J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const UNIX_J2000: i64 = 946_728_000;

/// Unix timestamp of day 0 of the lunar theory (1999-12-31 00:00:00 UTC, "2000 January 0.0")
pub const UNIX_LUNAR_EPOCH: i64 = 946_598_400;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC)
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Obliquity of the ecliptic in degrees, held fixed at its J2000 value
pub const OBLIQUITY_DEG: Degree = 23.43928;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units (Earth radii for the Moon)
pub type Distance = f64;
/// Elapsed seconds between two instants
pub type Seconds = f64;

/// Convert an angle from degrees to radians.
#[inline]
pub fn radians(degrees: Degree) -> Radian {
    degrees * RADEG
}

/// Convert an angle from radians to degrees.
#[inline]
pub fn degrees(radians: Radian) -> Degree {
    radians / RADEG
}
