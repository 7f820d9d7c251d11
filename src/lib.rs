//! Low-precision geocentric positions of the Sun, the Moon and the planets.
//!
//! Positions are computed from secular orbital elements, solved with Kepler's equation and
//! rotated into equatorial coordinates. The Moon additionally goes through a short
//! perturbation series. Accuracy is of the order of a few arcminutes for the planets.

pub mod bodies;
pub mod config;
pub mod constants;
pub mod elements;
pub mod format;
pub mod kepler;
pub mod lunar;
pub mod orrery_errors;
pub mod ref_system;
pub mod time;
