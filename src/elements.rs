//! # Orbital elements
//!
//! Secular (mean) orbital elements of the Sun, the planets, Pluto and the Moon.
//!
//! Each body has a compiled-in [`ReferenceElementSet`]: element values at a reference epoch
//! and their linear rate of change. [`elements_at`] extrapolates the six primary elements
//! to an instant and derives the remaining two.
//!
//! ## Units
//!
//! * Planets and Pluto: J2000.0 epoch, rates per Julian century, semi-major axis in AU.
//! * Moon and the lunar-theory Sun: epoch 1999-12-31T00:00:00 UTC (2000 January 0.0),
//!   rates per day, the Moon's semi-major axis in Earth radii.
//!
//! Angles are tabulated in degrees and converted to radians after extrapolation.

use serde::Serialize;

use crate::constants::{
    radians, Radian, DAYS_PER_JULIAN_CENTURY, SECONDS_PER_DAY, UNIX_J2000, UNIX_LUNAR_EPOCH,
};
use crate::time::Timestamp;

/// Interpolated orbital elements of a body at an instant.
///
/// Units:
/// * `semi_major_axis`: AU (Earth radii for the Moon)
/// * `eccentricity`: unitless
/// * every angle: radians
///
/// The mean anomaly and the argument of perihelion are derived from the other elements
/// on construction and cannot be set independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalElements {
    semi_major_axis: f64,
    eccentricity: f64,
    inclination: Radian,
    mean_longitude: Radian,
    perihelion_longitude: Radian,
    ascending_node_longitude: Radian,
    mean_anomaly: Radian,
    perihelion_argument: Radian,
}

impl OrbitalElements {
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: Radian,
        mean_longitude: Radian,
        perihelion_longitude: Radian,
        ascending_node_longitude: Radian,
    ) -> Self {
        OrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            mean_longitude,
            perihelion_longitude,
            ascending_node_longitude,
            mean_anomaly: mean_longitude - perihelion_longitude,
            perihelion_argument: perihelion_longitude - ascending_node_longitude,
        }
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn inclination(&self) -> Radian {
        self.inclination
    }

    pub fn mean_longitude(&self) -> Radian {
        self.mean_longitude
    }

    pub fn perihelion_longitude(&self) -> Radian {
        self.perihelion_longitude
    }

    pub fn ascending_node_longitude(&self) -> Radian {
        self.ascending_node_longitude
    }

    /// Mean longitude minus longitude of perihelion
    pub fn mean_anomaly(&self) -> Radian {
        self.mean_anomaly
    }

    /// Longitude of perihelion minus longitude of ascending node
    pub fn perihelion_argument(&self) -> Radian {
        self.perihelion_argument
    }
}

/// The six tabulated elements, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementValues {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub mean_longitude: f64,
    pub perihelion_longitude: f64,
    pub ascending_node_longitude: f64,
}

impl ElementValues {
    const fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        mean_longitude: f64,
        perihelion_longitude: f64,
        ascending_node_longitude: f64,
    ) -> Self {
        ElementValues {
            semi_major_axis,
            eccentricity,
            inclination,
            mean_longitude,
            perihelion_longitude,
            ascending_node_longitude,
        }
    }

    const ZERO: ElementValues = ElementValues::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
}

/// Time unit of the rates in a [`ReferenceElementSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateUnit {
    JulianCentury,
    Day,
}

impl RateUnit {
    fn seconds(self) -> f64 {
        match self {
            RateUnit::JulianCentury => SECONDS_PER_DAY * DAYS_PER_JULIAN_CENTURY,
            RateUnit::Day => SECONDS_PER_DAY,
        }
    }
}

/// Elements of one body at a reference epoch, with their rate of change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceElementSet {
    pub epoch: Timestamp,
    pub unit: RateUnit,
    pub at_epoch: ElementValues,
    pub rate: ElementValues,
}

impl ReferenceElementSet {
    /// Elapsed time from the reference epoch to `at`, in the set's rate unit.
    pub fn elapsed_units(&self, at: Timestamp) -> f64 {
        (at - self.epoch) / self.unit.seconds()
    }
}

/// Extrapolate `set` to the instant `at`.
///
/// Arguments
/// ---------
/// * `set`: reference elements and rates of a body
/// * `at`: instant of interest
///
/// Return
/// ------
/// * the elements at `at`, angles converted to radians
pub fn elements_at(set: &ReferenceElementSet, at: Timestamp) -> OrbitalElements {
    let t = set.elapsed_units(at);
    let base = &set.at_epoch;
    let rate = &set.rate;

    OrbitalElements::new(
        base.semi_major_axis + rate.semi_major_axis * t,
        base.eccentricity + rate.eccentricity * t,
        radians(base.inclination + rate.inclination * t),
        radians(base.mean_longitude + rate.mean_longitude * t),
        radians(base.perihelion_longitude + rate.perihelion_longitude * t),
        radians(base.ascending_node_longitude + rate.ascending_node_longitude * t),
    )
}

const J2000: Timestamp = Timestamp::from_unix(UNIX_J2000);
const LUNAR_EPOCH: Timestamp = Timestamp::from_unix(UNIX_LUNAR_EPOCH);

const fn planet(at_epoch: ElementValues, rate: ElementValues) -> ReferenceElementSet {
    ReferenceElementSet {
        epoch: J2000,
        unit: RateUnit::JulianCentury,
        at_epoch,
        rate,
    }
}

// -------------------------------------------------------------------------------------------------
// Catalog
// -------------------------------------------------------------------------------------------------

/// The Sun sits at the heliocentric origin; its elements are all zero.
pub const SUN: ReferenceElementSet = planet(ElementValues::ZERO, ElementValues::ZERO);

pub const MERCURY: ReferenceElementSet = planet(
    ElementValues::new(0.387009927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593),
    ElementValues::new(0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081),
);

pub const VENUS: ReferenceElementSet = planet(
    ElementValues::new(0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255),
    ElementValues::new(0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418),
);

pub const EARTH: ReferenceElementSet = planet(
    ElementValues::new(1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0),
    ElementValues::new(0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0),
);

pub const MARS: ReferenceElementSet = planet(
    ElementValues::new(1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891),
    ElementValues::new(0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343),
);

pub const JUPITER: ReferenceElementSet = planet(
    ElementValues::new(5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909),
    ElementValues::new(-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106),
);

pub const SATURN: ReferenceElementSet = planet(
    ElementValues::new(9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448),
    ElementValues::new(-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794),
);

pub const URANUS: ReferenceElementSet = planet(
    ElementValues::new(19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503),
    ElementValues::new(-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589),
);

pub const NEPTUNE: ReferenceElementSet = planet(
    ElementValues::new(30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574),
    ElementValues::new(0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664),
);

pub const PLUTO: ReferenceElementSet = planet(
    ElementValues::new(39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684),
    ElementValues::new(-0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482),
);

/// Mean lunar orbit, semi-major axis in Earth radii.
pub const MOON: ReferenceElementSet = ReferenceElementSet {
    epoch: LUNAR_EPOCH,
    unit: RateUnit::Day,
    at_epoch: ElementValues::new(60.2666, 0.0549, 5.1454, 198.5516, 83.1862, 125.1228),
    rate: ElementValues::new(0.0, 0.0, 0.0, 13.1763964649, 0.111403514, -0.0529538083),
};

/// Mean solar elements used only as arguments of the lunar perturbation series.
pub const LUNAR_SUN: ReferenceElementSet = ReferenceElementSet {
    epoch: LUNAR_EPOCH,
    unit: RateUnit::Day,
    at_epoch: ElementValues::new(1.0, 0.016709, 0.0, 278.9874, -77.0596, 0.0),
    rate: ElementValues::new(0.0, -0.000000001151, 0.0, 0.98564735200, 0.00004709350, 0.0),
};
