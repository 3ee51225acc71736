use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    Force, StateVector,
    constants::{EARTH_EQUATORIAL_RADIUS, EARTH_J2, EARTH_MU},
    position,
};

/// Oblateness perturbation from the J2 zonal harmonic.
///
/// Only the perturbation is returned, the central term is left to
/// [`PointMassGravity`](crate::PointMassGravity).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct J2Gravity {
    pub mu: f64,
    pub j2: f64,
    pub radius: f64,
}

impl J2Gravity {
    pub fn new(mu: f64, j2: f64, radius: f64) -> Self {
        Self { mu, j2, radius }
    }

    pub fn earth() -> Self {
        Self::new(EARTH_MU, EARTH_J2, EARTH_EQUATORIAL_RADIUS)
    }
}

impl Default for J2Gravity {
    fn default() -> Self {
        Self::earth()
    }
}

impl Force for J2Gravity {
    fn name(&self) -> &str {
        "J2"
    }

    fn formula(&self) -> &str {
        r"\frac{3 J_2 GM R^2}{2 r^5}\left[(5\frac{z^2}{r^2} - 1)x, (5\frac{z^2}{r^2} - 1)y, (5\frac{z^2}{r^2} - 3)z\right]"
    }

    fn acceleration(&self, state: &StateVector, _t: f64) -> Vector3<f64> {
        let r = position(state);
        let r2 = r.magnitude_squared();
        let r5 = r2 * r2 * r2.sqrt();
        let factor = 1.5 * self.j2 * self.mu * self.radius * self.radius / r5;
        let z2_r2 = r.z * r.z / r2;

        Vector3::new(
            factor * r.x * (5.0 * z2_r2 - 1.0),
            factor * r.y * (5.0 * z2_r2 - 1.0),
            factor * r.z * (5.0 * z2_r2 - 3.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equator_pulls_inward() {
        let j2 = J2Gravity::earth();
        let r = 6778.0;
        let a = j2.acceleration(&StateVector::new(r, 0.0, 0.0, 0.0, 7.67, 0.0), 0.0);
        let expected = -1.5 * EARTH_J2 * EARTH_MU * EARTH_EQUATORIAL_RADIUS.powi(2) / r.powi(4);
        assert_relative_eq!(a.x, expected, max_relative = 1e-12);
        assert_eq!(a.z, 0.0);
    }

    #[test]
    fn pole_pushes_outward() {
        let j2 = J2Gravity::earth();
        let r = 6778.0;
        let a = j2.acceleration(&StateVector::new(0.0, 0.0, r, 7.67, 0.0, 0.0), 0.0);
        let expected = 3.0 * EARTH_J2 * EARTH_MU * EARTH_EQUATORIAL_RADIUS.powi(2) / r.powi(4);
        assert_relative_eq!(a.z, expected, max_relative = 1e-12);
        assert_eq!(a.x, 0.0);
        assert_eq!(a.y, 0.0);
    }

    #[test]
    fn three_orders_below_central_term() {
        let j2 = J2Gravity::earth();
        let state = StateVector::new(5000.0, 3000.0, 3500.0, 0.0, 0.0, 0.0);
        let ratio = j2.acc_norm(&state, 0.0) / (EARTH_MU / position(&state).magnitude_squared());
        assert!(ratio > 1e-4 && ratio < 1e-2, "ratio = {ratio}");
    }
}
