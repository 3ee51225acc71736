use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    Force, StateVector,
    constants::{EARTH_MASS, G},
    position,
};

/// Central point-mass attraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointMassGravity {
    pub mu: f64,
}

impl PointMassGravity {
    pub fn new(mu: f64) -> Self {
        Self { mu }
    }

    pub fn earth() -> Self {
        Self::new(G * EARTH_MASS)
    }
}

impl Default for PointMassGravity {
    fn default() -> Self {
        Self::earth()
    }
}

impl Force for PointMassGravity {
    fn name(&self) -> &str {
        "gravity"
    }

    fn formula(&self) -> &str {
        r"-\frac{GM}{r^3}\vec{r}"
    }

    fn acceleration(&self, state: &StateVector, _t: f64) -> Vector3<f64> {
        let r = position(state);
        let r_mag = r.magnitude();
        -r * self.mu / r_mag.powi(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_MU, EARTH_RADIUS};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn surface_gravity() {
        let g = PointMassGravity::earth();
        let state = StateVector::new(EARTH_RADIUS, 0.0, 0.0, 0.0, 0.0, 0.0);
        let a = g.acceleration(&state, 0.0);
        // ~9.82 m/s^2 expressed in km/s^2
        assert_relative_eq!(a.x, -EARTH_MU / (EARTH_RADIUS * EARTH_RADIUS), max_relative = 1e-12);
        assert_abs_diff_eq!(a.x, -9.82e-3, epsilon = 1e-5);
        assert_eq!(a.y, 0.0);
        assert_eq!(a.z, 0.0);
    }

    #[test]
    fn points_to_center() {
        let g = PointMassGravity::earth();
        let state = StateVector::new(4000.0, -3000.0, 5000.0, 1.0, 2.0, 3.0);
        let a = g.acceleration(&state, 0.0);
        let r = position(&state);
        assert_abs_diff_eq!(a.normalize(), -r.normalize(), epsilon = 1e-12);
    }

    #[test]
    fn independent_of_velocity_and_time() {
        let g = PointMassGravity::earth();
        let s1 = StateVector::new(7000.0, 0.0, 0.0, 0.0, 7.5, 0.0);
        let s2 = StateVector::new(7000.0, 0.0, 0.0, -3.0, 0.0, 1.0);
        assert_eq!(g.acceleration(&s1, 0.0), g.acceleration(&s2, 500.0));
    }
}
