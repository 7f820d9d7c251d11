#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use orrery::format::normalize_degrees;
use orrery::ref_system::SphericalCoordinates;
use orrery::time::Timestamp;

/// Reference position with per-component tolerances; `None` skips the component.
pub struct Expected {
    pub right_ascension: (f64, f64),
    pub declination: (f64, f64),
    pub distance: Option<(f64, f64)>,
}

pub fn assert_position_close(actual: &SphericalCoordinates, expected: &Expected) {
    let (ra, ra_eps) = expected.right_ascension;
    assert_abs_diff_eq!(normalize_degrees(actual.right_ascension), ra, epsilon = ra_eps);

    let (decl, decl_eps) = expected.declination;
    assert_abs_diff_eq!(actual.declination, decl, epsilon = decl_eps);

    if let Some((dist, dist_eps)) = expected.distance {
        assert_abs_diff_eq!(actual.distance, dist, epsilon = dist_eps);
    }
}

/// UTC timestamp computed directly by chrono.
pub fn utc_timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Timestamp {
    let seconds = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .expect("valid test date")
        .and_utc()
        .timestamp();
    Timestamp::from_unix(seconds)
}
