//! # Lunar perturbations
//!
//! Low-order theory of the Moon: its mean Keplerian orbit is corrected by the largest
//! periodic terms caused by the Sun (evection, variation, yearly equation, …).
//!
//! The series arguments are combinations of four fundamental angles:
//!
//! * `Mm`: mean anomaly of the Moon
//! * `Ms`: mean anomaly of the Sun
//! * `D`: mean elongation of the Moon, `Lm − Ls`
//! * `F`: argument of latitude of the Moon, `Lm − Ω`
//!
//! Longitude and latitude terms are in degrees, distance terms in Earth radii.

use nalgebra::Vector3;

use crate::constants::{radians, Degree, Radian};
use crate::elements::OrbitalElements;
use crate::orrery_errors::OrreryError;
use crate::ref_system::{helio_orbital, orbital_to_ecliptic};

/// One periodic term: `coefficient × trig(mm·Mm + ms·Ms + d·D + f·F)`.
struct SeriesTerm {
    coefficient: f64,
    mm: f64,
    ms: f64,
    d: f64,
    f: f64,
}

const fn term(coefficient: f64, mm: f64, ms: f64, d: f64, f: f64) -> SeriesTerm {
    SeriesTerm {
        coefficient,
        mm,
        ms,
        d,
        f,
    }
}

/// Sine terms in longitude (degrees)
const LONGITUDE_TERMS: [SeriesTerm; 12] = [
    term(-1.274, 1.0, 0.0, -2.0, 0.0), // evection
    term(0.658, 0.0, 0.0, 2.0, 0.0),   // variation
    term(-0.186, 0.0, 1.0, 0.0, 0.0),  // yearly equation
    term(-0.059, 2.0, 0.0, -2.0, 0.0),
    term(-0.057, 1.0, 1.0, -2.0, 0.0),
    term(0.053, 1.0, 0.0, 2.0, 0.0),
    term(0.046, 0.0, -1.0, 2.0, 0.0),
    term(0.041, 1.0, -1.0, 0.0, 0.0),
    term(-0.035, 0.0, 0.0, 1.0, 0.0), // parallactic equation
    term(-0.031, 1.0, 1.0, 0.0, 0.0),
    term(-0.015, 0.0, 0.0, -2.0, 2.0),
    term(0.011, 1.0, 0.0, -4.0, 0.0),
];

/// Sine terms in latitude (degrees)
const LATITUDE_TERMS: [SeriesTerm; 5] = [
    term(-0.173, 0.0, 0.0, -2.0, 1.0),
    term(-0.055, 1.0, 0.0, -2.0, -1.0),
    term(-0.046, 1.0, 0.0, -2.0, 1.0),
    term(0.033, 0.0, 0.0, 2.0, 1.0),
    term(0.017, 2.0, 0.0, 0.0, 1.0),
];

/// Cosine terms in distance (Earth radii)
const DISTANCE_TERMS: [SeriesTerm; 2] = [
    term(-0.58, 1.0, 0.0, -2.0, 0.0),
    term(-0.46, 0.0, 0.0, 2.0, 0.0),
];

/// Fundamental arguments of the series, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArguments {
    pub moon_mean_anomaly: Radian,
    pub sun_mean_anomaly: Radian,
    pub mean_elongation: Radian,
    pub argument_of_latitude: Radian,
}

impl FundamentalArguments {
    /// Arguments from the Moon's elements and the lunar-theory Sun's elements.
    pub fn new(moon: &OrbitalElements, sun: &OrbitalElements) -> Self {
        FundamentalArguments {
            moon_mean_anomaly: moon.mean_anomaly(),
            sun_mean_anomaly: sun.mean_anomaly(),
            mean_elongation: moon.mean_longitude() - sun.mean_longitude(),
            argument_of_latitude: moon.mean_longitude() - moon.ascending_node_longitude(),
        }
    }

    fn angle(&self, t: &SeriesTerm) -> Radian {
        t.mm * self.moon_mean_anomaly
            + t.ms * self.sun_mean_anomaly
            + t.d * self.mean_elongation
            + t.f * self.argument_of_latitude
    }

    fn sine_series(&self, terms: &[SeriesTerm]) -> f64 {
        terms.iter().map(|t| t.coefficient * self.angle(t).sin()).sum()
    }

    fn cosine_series(&self, terms: &[SeriesTerm]) -> f64 {
        terms.iter().map(|t| t.coefficient * self.angle(t).cos()).sum()
    }
}

/// Corrections to add to the Moon's unperturbed ecliptic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPerturbations {
    pub longitude: Degree,
    pub latitude: Degree,
    /// Earth radii
    pub distance: f64,
}

pub fn perturbations(args: &FundamentalArguments) -> LunarPerturbations {
    LunarPerturbations {
        longitude: args.sine_series(&LONGITUDE_TERMS),
        latitude: args.sine_series(&LATITUDE_TERMS),
        distance: args.cosine_series(&DISTANCE_TERMS),
    }
}

/// Geocentric ecliptic coordinates of the Moon, in Earth radii.
///
/// The mean orbit is rotated into the ecliptic and converted to longitude and latitude,
/// the radius is read from the orbital-plane `z` component, and the three are corrected by
/// [`perturbations`] before being turned back into rectangular coordinates.
///
/// Arguments
/// ---------
/// * `moon`: elements of the Moon
/// * `sun`: elements of the Sun in the lunar theory (not the planetary Earth/Sun elements)
pub fn perturbed_geo_ecliptic(
    moon: &OrbitalElements,
    sun: &OrbitalElements,
) -> Result<Vector3<f64>, OrreryError> {
    let orbital = helio_orbital(moon)?;
    let ecliptic = orbital_to_ecliptic(&orbital, moon);

    let correction = perturbations(&FundamentalArguments::new(moon, sun));

    let lon = ecliptic.y.atan2(ecliptic.x) + radians(correction.longitude);
    let lat = ecliptic.z.atan2(ecliptic.x.hypot(ecliptic.y)) + radians(correction.latitude);
    let rhc = orbital.z + correction.distance;

    Ok(Vector3::new(
        rhc * lon.cos() * lat.cos(),
        rhc * lon.sin() * lat.cos(),
        rhc * lat.sin(),
    ))
}
