//! # Angle formatting
//!
//! Sexagesimal and zodiacal renderings of right ascension and declination, plus the
//! matching parsers.
//!
//! | Function            | Example                     |
//! |---------------------|-----------------------------|
//! | [`rasc_string`]     | `182.625` → `12h 10m 30s`   |
//! | [`decl_string`]     | `12.175` → `+12d 10m 30s`   |
//! | [`rasc_to_zodiac`]  | `80.3167` → `20GE19`        |
//!
//! Conversions truncate to whole seconds; they never round up.

use std::fmt;

use serde::Serialize;

use crate::constants::Degree;

/// Reduce an angle to [0, 360).
pub fn normalize_degrees(angle: Degree) -> Degree {
    let norm = angle.rem_euclid(360.0);
    // tiny negative angles round up to exactly 360
    if norm >= 360.0 {
        0.0
    } else {
        norm
    }
}

/// Hours, minutes and seconds of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hms {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

/// Degrees, minutes and seconds of arc; every component carries the sign of the angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dms {
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: i32,
}

/// Convert an angle to hours, minutes and seconds of time after normalizing it.
pub fn deg_to_hms(angle: Degree) -> Hms {
    let total_seconds = (normalize_degrees(angle) / 360.0 * 86_400.0).floor() as i32;
    Hms {
        hours: total_seconds / 3600,
        minutes: total_seconds % 3600 / 60,
        seconds: total_seconds % 60,
    }
}

/// Convert an angle to degrees, minutes and seconds of arc, truncating toward zero.
pub fn deg_to_dms(angle: Degree) -> Dms {
    let arcsec = angle * 3600.0;
    let total_seconds = if angle > 0.0 {
        arcsec.floor()
    } else {
        arcsec.ceil()
    } as i32;
    Dms {
        degrees: total_seconds / 3600,
        minutes: total_seconds % 3600 / 60,
        seconds: total_seconds % 60,
    }
}

/// Right ascension as `HHh MMm SSs`.
pub fn rasc_string(rasc: Degree) -> String {
    let hms = deg_to_hms(rasc);
    format!("{:02}h {:02}m {:02}s", hms.hours, hms.minutes, hms.seconds)
}

/// Declination as `±DDd MMm SSs`.
///
/// The sign is always written, also for angles between −1° and 0°.
pub fn decl_string(decl: Degree) -> String {
    let dms = deg_to_dms(decl);
    let sign = if decl < 0.0 { '-' } else { '+' };
    format!(
        "{sign}{:02}d {:02}m {:02}s",
        dms.degrees.abs(),
        dms.minutes.abs(),
        dms.seconds.abs()
    )
}

/// Split a string such as `12h 10m 30s` into three numbers, each followed by its unit.
fn parse_sexagesimal(text: &str, units: [char; 3]) -> Option<(f64, f64, f64)> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }

    let mut values = [0.0; 3];
    for ((value, part), unit) in values.iter_mut().zip(&parts).zip(units) {
        *value = part.strip_suffix(unit)?.parse().ok()?;
    }
    Some((values[0], values[1], values[2]))
}

/// Parse a right ascension written as `HHh MMm SSs` back to degrees.
///
/// Returns `None` if the input format is invalid.
pub fn parse_rasc(text: &str) -> Option<Degree> {
    let (h, m, s) = parse_sexagesimal(text, ['h', 'm', 's'])?;
    Some((h + m / 60.0 + s / 3600.0) * 15.0)
}

/// Parse a declination written as `±DDd MMm SSs` back to degrees.
///
/// Returns `None` if the input format is invalid.
pub fn parse_decl(text: &str) -> Option<Degree> {
    let text = text.trim();
    let sign = if text.starts_with('-') { -1.0 } else { 1.0 };
    let (d, m, s) = parse_sexagesimal(text.trim_start_matches(['-', '+']), ['d', 'm', 's'])?;
    Some(sign * (d + m / 60.0 + s / 3600.0))
}

/// One of the twelve 30° signs of the zodiac, starting at the vernal equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "AR",
            ZodiacSign::Taurus => "TA",
            ZodiacSign::Gemini => "GE",
            ZodiacSign::Cancer => "CN",
            ZodiacSign::Leo => "LE",
            ZodiacSign::Virgo => "VI",
            ZodiacSign::Libra => "LI",
            ZodiacSign::Scorpio => "SC",
            ZodiacSign::Sagittarius => "SG",
            ZodiacSign::Capricorn => "CP",
            ZodiacSign::Aquarius => "AQ",
            ZodiacSign::Pisces => "PI",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a right ascension within its zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacInfo {
    /// Right ascension normalized to [0, 360)
    pub right_ascension: Degree,
    pub sign: ZodiacSign,
    /// Whole degrees into the sign, 0..30
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: i32,
}

pub fn zodiac_info(rasc: Degree) -> ZodiacInfo {
    let norm = normalize_degrees(rasc);
    let dms = deg_to_dms(norm);
    let index = (dms.degrees / 30).clamp(0, 11) as usize;

    ZodiacInfo {
        right_ascension: norm,
        sign: ZodiacSign::ALL[index],
        degrees: dms.degrees % 30,
        minutes: dms.minutes,
        seconds: dms.seconds,
    }
}

pub fn zodiac_sign(rasc: Degree) -> ZodiacSign {
    zodiac_info(rasc).sign
}

/// Zodiacal notation `DDSSMM`: degrees into the sign, short sign name, minutes.
pub fn rasc_to_zodiac(rasc: Degree) -> String {
    let info = zodiac_info(rasc);
    format!(
        "{:02}{}{:02}",
        info.degrees,
        info.sign.short_name(),
        info.minutes
    )
}
