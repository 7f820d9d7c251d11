//! # Celestial bodies
//!
//! The catalog is closed: the Sun, the eight planets, Pluto and the Moon. Each [`Body`]
//! maps to a [`BodyDescriptor`] holding its name, its reference elements and the rule that
//! places it relative to the Earth. All bodies share the same pipeline
//! ([`crate::ref_system`]); the rule only replaces the stages that are degenerate for them:
//!
//! | Body   | Heliocentric     | Geocentric ecliptic                        |
//! |--------|------------------|--------------------------------------------|
//! | Sun    | origin           | − Earth                                    |
//! | Earth  | Kepler orbit     | origin                                     |
//! | Moon   | mean orbit       | perturbed lunar orbit, Earth radii         |
//! | others | Kepler orbit     | heliocentric − Earth                       |

use std::fmt;
use std::str::FromStr;

use log::trace;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Distance};
use crate::elements::{self, elements_at, OrbitalElements, ReferenceElementSet};
use crate::format::{deg_to_dms, deg_to_hms, zodiac_info, Dms, Hms, ZodiacInfo};
use crate::lunar::perturbed_geo_ecliptic;
use crate::orrery_errors::OrreryError;
use crate::ref_system::{
    ecliptic_to_equatorial, helio_orbital, orbital_to_ecliptic, rectangular_to_spherical,
    SphericalCoordinates,
};
use crate::time::{current_timestamp, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Moon,
}

impl Body {
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Moon,
    ];

    /// Bodies with a position on the sky, i.e. every body but the Earth.
    pub const VISIBLE: [Body; 10] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Moon,
    ];

    pub fn descriptor(self) -> &'static BodyDescriptor {
        match self {
            Body::Sun => &SUN,
            Body::Mercury => &MERCURY,
            Body::Venus => &VENUS,
            Body::Earth => &EARTH,
            Body::Mars => &MARS,
            Body::Jupiter => &JUPITER,
            Body::Saturn => &SATURN,
            Body::Uranus => &URANUS,
            Body::Neptune => &NEPTUNE,
            Body::Pluto => &PLUTO,
            Body::Moon => &MOON,
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown body '{s}'"))
    }
}

/// How a body is placed relative to the Sun and the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateRule {
    /// Keplerian orbit around the Sun, seen from the Earth
    Orbiting,
    /// The Sun: heliocentric coordinates are the origin
    Origin,
    /// The Earth: geocentric coordinates are the origin
    Observer,
    /// The Moon: geocentric orbit corrected by the lunar perturbation series
    LunarTheory,
    /// Only the orbital elements are meaningful; every coordinate is the origin
    ElementsOnly,
}

/// Static description of a body.
#[derive(Debug)]
pub struct BodyDescriptor {
    pub name: &'static str,
    pub elements: &'static ReferenceElementSet,
    pub rule: CoordinateRule,
}

const fn descriptor(
    name: &'static str,
    elements: &'static ReferenceElementSet,
    rule: CoordinateRule,
) -> BodyDescriptor {
    BodyDescriptor {
        name,
        elements,
        rule,
    }
}

const SUN: BodyDescriptor = descriptor("Sun", &elements::SUN, CoordinateRule::Origin);
const MERCURY: BodyDescriptor = descriptor("Mercury", &elements::MERCURY, CoordinateRule::Orbiting);
const VENUS: BodyDescriptor = descriptor("Venus", &elements::VENUS, CoordinateRule::Orbiting);
const EARTH: BodyDescriptor = descriptor("Earth", &elements::EARTH, CoordinateRule::Observer);
const MARS: BodyDescriptor = descriptor("Mars", &elements::MARS, CoordinateRule::Orbiting);
const JUPITER: BodyDescriptor = descriptor("Jupiter", &elements::JUPITER, CoordinateRule::Orbiting);
const SATURN: BodyDescriptor = descriptor("Saturn", &elements::SATURN, CoordinateRule::Orbiting);
const URANUS: BodyDescriptor = descriptor("Uranus", &elements::URANUS, CoordinateRule::Orbiting);
const NEPTUNE: BodyDescriptor = descriptor("Neptune", &elements::NEPTUNE, CoordinateRule::Orbiting);
const PLUTO: BodyDescriptor = descriptor("Pluto", &elements::PLUTO, CoordinateRule::Orbiting);
const MOON: BodyDescriptor = descriptor("Moon", &elements::MOON, CoordinateRule::LunarTheory);

/// The Sun as it enters the lunar theory; never exposed as a [`Body`].
const LUNAR_SUN: BodyDescriptor = descriptor(
    "Sun (lunar theory)",
    &elements::LUNAR_SUN,
    CoordinateRule::ElementsOnly,
);

/// A body at a fixed instant.
///
/// The orbital elements are computed once on construction; every coordinate query is a
/// pure function of them and of the instant.
#[derive(Debug, Clone, Copy)]
pub struct CelestialBody {
    descriptor: &'static BodyDescriptor,
    at: Timestamp,
    elements: OrbitalElements,
}

impl CelestialBody {
    pub fn new(body: Body, at: Timestamp) -> Self {
        Self::from_descriptor(body.descriptor(), at)
    }

    /// The body at the current instant.
    pub fn now(body: Body) -> Self {
        Self::new(body, current_timestamp())
    }

    fn from_descriptor(descriptor: &'static BodyDescriptor, at: Timestamp) -> Self {
        CelestialBody {
            descriptor,
            at,
            elements: elements_at(descriptor.elements, at),
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn at(&self) -> Timestamp {
        self.at
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Calculation instant, e.g. `Saturday August 10, 2013 00:34:00 UTC`.
    pub fn calc_time_string(&self) -> String {
        self.at.time_string()
    }

    /// Coordinates in the orbital plane; `z` holds the orbital radius.
    pub fn helio_orbital(&self) -> Result<Vector3<f64>, OrreryError> {
        match self.descriptor.rule {
            CoordinateRule::Origin | CoordinateRule::ElementsOnly => Ok(Vector3::zeros()),
            _ => helio_orbital(&self.elements),
        }
    }

    pub fn helio_ecliptic(&self) -> Result<Vector3<f64>, OrreryError> {
        match self.descriptor.rule {
            CoordinateRule::Origin | CoordinateRule::ElementsOnly => Ok(Vector3::zeros()),
            _ => Ok(orbital_to_ecliptic(&self.helio_orbital()?, &self.elements)),
        }
    }

    pub fn geo_ecliptic(&self) -> Result<Vector3<f64>, OrreryError> {
        match self.descriptor.rule {
            CoordinateRule::Observer | CoordinateRule::ElementsOnly => Ok(Vector3::zeros()),
            CoordinateRule::LunarTheory => {
                let sun = Self::from_descriptor(&LUNAR_SUN, self.at);
                perturbed_geo_ecliptic(&self.elements, &sun.elements)
            }
            CoordinateRule::Orbiting | CoordinateRule::Origin => {
                let earth = Self::new(Body::Earth, self.at);
                Ok(self.helio_ecliptic()? - earth.helio_ecliptic()?)
            }
        }
    }

    pub fn geo_equatorial(&self) -> Result<Vector3<f64>, OrreryError> {
        Ok(ecliptic_to_equatorial(&self.geo_ecliptic()?))
    }

    pub fn spherical(&self) -> Result<SphericalCoordinates, OrreryError> {
        let sph = rectangular_to_spherical(&self.geo_equatorial()?);
        trace!(
            "{} at {}: ra = {}, decl = {}, dist = {}",
            self.name(),
            self.at,
            sph.right_ascension,
            sph.declination,
            sph.distance
        );
        Ok(sph)
    }

    /// Right ascension in degrees, not normalized.
    pub fn right_ascension(&self) -> Result<Degree, OrreryError> {
        Ok(self.spherical()?.right_ascension)
    }

    pub fn declination(&self) -> Result<Degree, OrreryError> {
        Ok(self.spherical()?.declination)
    }

    /// Distance from the Earth, in AU (Earth radii for the Moon).
    pub fn distance(&self) -> Result<Distance, OrreryError> {
        Ok(self.spherical()?.distance)
    }
}

/// Everything known about a body at an instant, in a serializable form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionRecord {
    pub body: Body,
    pub coordinates: SphericalCoordinates,
    pub right_ascension_hms: Hms,
    pub declination_dms: Dms,
    pub zodiac: ZodiacInfo,
    pub elements: OrbitalElements,
}

/// Geocentric equatorial position of `body` at `at`.
pub fn position(body: Body, at: Timestamp) -> Result<SphericalCoordinates, OrreryError> {
    CelestialBody::new(body, at).spherical()
}

/// Position of `body` at `at` with its sexagesimal, zodiacal and orbital details.
pub fn position_record(body: Body, at: Timestamp) -> Result<PositionRecord, OrreryError> {
    let celestial = CelestialBody::new(body, at);
    let coordinates = celestial.spherical()?;
    Ok(PositionRecord {
        body,
        coordinates,
        right_ascension_hms: deg_to_hms(coordinates.right_ascension),
        declination_dms: deg_to_dms(coordinates.declination),
        zodiac: zodiac_info(coordinates.right_ascension),
        elements: celestial.elements,
    })
}

#[cfg(test)]
mod bodies_test {
    use approx::assert_abs_diff_eq;

    use super::*;

    const AT: Timestamp = Timestamp::from_unix(1_376_094_840);

    #[test]
    fn test_names_and_parsing() {
        assert_eq!(Body::Jupiter.name(), "Jupiter");
        assert_eq!(Body::Moon.to_string(), "Moon");
        assert_eq!("saturn".parse::<Body>(), Ok(Body::Saturn));
        assert_eq!(" PLUTO ".parse::<Body>(), Ok(Body::Pluto));
        assert!("vulcan".parse::<Body>().is_err());
        for body in Body::ALL {
            assert_eq!(body.name().parse::<Body>(), Ok(body));
        }
    }

    #[test]
    fn test_visible_bodies() {
        assert_eq!(Body::VISIBLE.len(), 10);
        assert!(!Body::VISIBLE.contains(&Body::Earth));
    }

    #[test]
    fn test_sun_is_heliocentric_origin() {
        let sun = CelestialBody::new(Body::Sun, AT);
        assert_eq!(sun.helio_orbital().unwrap(), Vector3::zeros());
        assert_eq!(sun.helio_ecliptic().unwrap(), Vector3::zeros());

        let earth = CelestialBody::new(Body::Earth, AT);
        assert_eq!(sun.geo_ecliptic().unwrap(), -earth.helio_ecliptic().unwrap());
        assert_abs_diff_eq!(
            sun.distance().unwrap(),
            earth.helio_orbital().unwrap().z,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_earth_is_geocentric_origin() {
        let earth = CelestialBody::new(Body::Earth, AT);
        assert_eq!(earth.geo_ecliptic().unwrap(), Vector3::zeros());
        assert_eq!(earth.geo_equatorial().unwrap(), Vector3::zeros());
        assert_eq!(earth.distance().unwrap(), 0.0);
        assert!(earth.helio_ecliptic().unwrap().norm() > 0.98);
    }

    #[test]
    fn test_lunar_sun_has_only_elements() {
        let sun = CelestialBody::from_descriptor(&LUNAR_SUN, AT);
        assert_eq!(sun.geo_equatorial().unwrap(), Vector3::zeros());
        assert_eq!(sun.elements().semi_major_axis(), 1.0);
    }

    #[test]
    fn test_planet_is_heliocentric_minus_earth() {
        let mars = CelestialBody::new(Body::Mars, AT);
        let earth = CelestialBody::new(Body::Earth, AT);
        assert_eq!(
            mars.geo_ecliptic().unwrap(),
            mars.helio_ecliptic().unwrap() - earth.helio_ecliptic().unwrap()
        );
    }

    #[test]
    fn test_position_matches_body() {
        for body in Body::VISIBLE {
            let celestial = CelestialBody::new(body, AT);
            let sph = position(body, AT).unwrap();
            assert_eq!(sph.right_ascension, celestial.right_ascension().unwrap());
            assert_eq!(sph.declination, celestial.declination().unwrap());
            assert_eq!(sph.distance, celestial.distance().unwrap());
            assert!(sph.declination.abs() <= 90.0);
        }
    }

    #[test]
    fn test_position_record() {
        let record = position_record(Body::Jupiter, AT).unwrap();
        let sph = position(Body::Jupiter, AT).unwrap();
        assert_eq!(record.body, Body::Jupiter);
        assert_eq!(record.coordinates, sph);
        assert_eq!(record.right_ascension_hms, deg_to_hms(sph.right_ascension));
        assert_eq!(record.declination_dms, deg_to_dms(sph.declination));
        assert_eq!(record.zodiac, zodiac_info(sph.right_ascension));
        assert_eq!(&record.elements, CelestialBody::new(Body::Jupiter, AT).elements());
    }

    #[test]
    fn test_moon_distance_in_earth_radii() {
        let moon = CelestialBody::new(Body::Moon, AT);
        let dist = moon.distance().unwrap();
        assert!((55.0..65.0).contains(&dist), "got {dist}");
    }

    #[test]
    fn test_calc_time_string() {
        let body = CelestialBody::new(Body::Venus, AT);
        assert_eq!(body.calc_time_string(), "Saturday August 10, 2013 00:34:00 UTC");
        assert_eq!(body.at(), AT);
    }

    #[test]
    fn test_now() {
        let before = current_timestamp();
        let body = CelestialBody::now(Body::Sun);
        assert!(body.at() >= before);
        assert!(body.distance().unwrap() > 0.98);
    }
}
