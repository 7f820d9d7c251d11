use log::warn;

use super::constants::Radian;
use crate::orrery_errors::OrreryError;

/// Residual of Kepler's equation below which the eccentric anomaly is accepted (radians)
const KEPLER_TOLERANCE: f64 = 1e-6;

/// Newton-Raphson iteration cap
const KEPLER_MAX_ITERATIONS: usize = 100;

/// Solve Kepler's equation `E − e·sin(E) = M` for the eccentric anomaly `E`.
///
/// Newton-Raphson iteration seeded at the mean anomaly, repeated while the residual of the
/// previous estimate exceeds 1e-6 radians.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians, not necessarily reduced to [0, 2π)
/// * `eccentricity`: orbital eccentricity, `0 ≤ e < 1`
///
/// Return
/// ------
/// * the eccentric anomaly in radians, on the same turn as `mean_anomaly`
/// * [`OrreryError::KeplerNonConvergence`] if the iteration cap is reached
pub fn solve_kepler(mean_anomaly: Radian, eccentricity: f64) -> Result<Radian, OrreryError> {
    debug_assert!(
        (0.0..1.0).contains(&eccentricity),
        "solve_kepler requires an elliptic orbit, got e = {eccentricity}"
    );

    let mut e_anom = mean_anomaly;
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let residual = e_anom - eccentricity * e_anom.sin() - mean_anomaly;
        e_anom -= residual / (1.0 - eccentricity * e_anom.cos());
        if residual.abs() <= KEPLER_TOLERANCE {
            return Ok(e_anom);
        }
    }

    warn!(
        "Kepler's equation did not converge for M = {mean_anomaly}, e = {eccentricity} \
         after {KEPLER_MAX_ITERATIONS} iterations"
    );
    Err(OrreryError::KeplerNonConvergence {
        mean_anomaly,
        eccentricity,
        iterations: KEPLER_MAX_ITERATIONS,
    })
}

#[cfg(test)]
mod kepler_test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::constants::{radians, DPI};

    #[test]
    fn test_solve_kepler() {
        let e_anom = solve_kepler(radians(20.0), 0.5).unwrap();
        assert_abs_diff_eq!(e_anom, radians(37.40006), epsilon = 1e-5);

        assert_eq!(solve_kepler(radians(0.0), 0.0).unwrap(), 0.0);

        let e_anom = solve_kepler(radians(360.0), 0.0).unwrap();
        assert_abs_diff_eq!(e_anom, radians(360.0), epsilon = 1e-12);
    }

    #[test]
    fn test_kepler_residual() {
        for &(m, e) in &[(0.3, 0.1), (2.5, 0.2056), (-1.2, 0.0934), (5.9, 0.2488), (40.0, 0.0549)] {
            let e_anom = solve_kepler(m, e).unwrap();
            assert_abs_diff_eq!(e_anom - e * e_anom.sin(), m, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_kepler_turn_is_preserved() {
        let e_anom = solve_kepler(radians(20.0) + DPI, 0.5).unwrap();
        assert_abs_diff_eq!(e_anom, radians(37.40006) + DPI, epsilon = 1e-5);
        assert_abs_diff_eq!(e_anom.rem_euclid(DPI), radians(37.40006), epsilon = 1e-5);
    }
}
