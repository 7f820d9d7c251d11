//! # Reference frames
//!
//! Rectangular coordinates move through a fixed chain of frames:
//!
//! ```text
//! orbital plane ──(ω, i, Ω)──▶ heliocentric ecliptic ──(− Earth)──▶ geocentric ecliptic
//!                                                                          │
//!                                                                     (obliquity ε)
//!                                                                          ▼
//!                               spherical (α, δ, r) ◀──────────── geocentric equatorial
//! ```
//!
//! Every frame is represented by a plain [`nalgebra::Vector3`]; which frame a vector lives
//! in depends on the function that produced it. The origin shift from heliocentric to
//! geocentric coordinates depends on the body and lives in [`crate::bodies`].
//!
//! ## Orbital-plane convention
//!
//! [`helio_orbital`] stores the in-plane radius `√(x² + y²)` in the `z` component instead
//! of an out-of-plane coordinate. Rotations to the ecliptic only read `x` and `y`, and the
//! lunar theory reads the radius from `z`.

use nalgebra::{Rotation3, Vector3};
use serde::Serialize;

use crate::constants::{degrees, radians, Degree, Distance, Radian, OBLIQUITY_DEG};
use crate::elements::OrbitalElements;
use crate::kepler::solve_kepler;
use crate::orrery_errors::OrreryError;

/// Right ascension, declination and distance of a body as seen from the Earth.
///
/// Units:
/// * `right_ascension`: degrees, straight from `atan2`, so in (−180, 180]
/// * `declination`: degrees
/// * `distance`: AU (Earth radii for the Moon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphericalCoordinates {
    pub right_ascension: Degree,
    pub declination: Degree,
    pub distance: Distance,
}

/// Obliquity of the ecliptic in radians.
pub fn obliquity() -> Radian {
    radians(OBLIQUITY_DEG)
}

/// Heliocentric coordinates of a body in its orbital plane.
///
/// Arguments
/// ---------
/// * `elements`: orbital elements of the body at the instant of interest
///
/// Return
/// ------
/// * `(x, y, r)` where `x` points to perihelion, `y` is 90° ahead in the direction of
///   motion and `r = √(x² + y²)` is the orbital radius
pub fn helio_orbital(elements: &OrbitalElements) -> Result<Vector3<f64>, OrreryError> {
    let ecc = elements.eccentricity();
    let sma = elements.semi_major_axis();
    let e_anom = solve_kepler(elements.mean_anomaly(), ecc)?;

    let x = sma * (e_anom.cos() - ecc);
    let y = sma * (1.0 - ecc.powi(2)).sqrt() * e_anom.sin();
    Ok(Vector3::new(x, y, x.hypot(y)))
}

/// Rotate orbital-plane coordinates into the heliocentric ecliptic frame.
///
/// Applies the classical closed-form composition of the rotations by the argument of
/// perihelion `ω`, the inclination `i` and the longitude of the ascending node `Ω`.
/// The `z` component of `orbital` is ignored.
pub fn orbital_to_ecliptic(orbital: &Vector3<f64>, elements: &OrbitalElements) -> Vector3<f64> {
    let (sin_arp, cos_arp) = elements.perihelion_argument().sin_cos();
    let (sin_lan, cos_lan) = elements.ascending_node_longitude().sin_cos();
    let (sin_inc, cos_inc) = elements.inclination().sin_cos();
    let (x, y) = (orbital.x, orbital.y);

    Vector3::new(
        x * (cos_arp * cos_lan - sin_arp * sin_lan * cos_inc)
            + y * (-sin_arp * cos_lan - cos_arp * sin_lan * cos_inc),
        x * (cos_arp * sin_lan + sin_arp * cos_lan * cos_inc)
            + y * (-sin_arp * sin_lan + cos_arp * cos_lan * cos_inc),
        x * sin_arp * sin_inc + y * cos_arp * sin_inc,
    )
}

/// Rotate geocentric ecliptic coordinates about the x axis by the obliquity of the ecliptic.
pub fn ecliptic_to_equatorial(ecliptic: &Vector3<f64>) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), obliquity()) * ecliptic
}

/// Convert geocentric equatorial coordinates to right ascension, declination and distance.
///
/// The right ascension is not normalized; see [`crate::format::normalize_degrees`].
/// At the origin every component is 0.
pub fn rectangular_to_spherical(equatorial: &Vector3<f64>) -> SphericalCoordinates {
    let (x, y, z) = (equatorial.x, equatorial.y, equatorial.z);
    SphericalCoordinates {
        right_ascension: degrees(y.atan2(x)),
        declination: degrees(z.atan2(x.hypot(y))),
        distance: equatorial.norm(),
    }
}
