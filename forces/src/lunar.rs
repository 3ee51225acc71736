use std::f64::consts::TAU;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    Force, StateVector,
    constants::{EARTH_MASS, G, MOON_DISTANCE, MOON_MASS},
    position,
};

/// Third-body perturbation of the Moon.
///
/// The Moon is placed on a circular orbit in the equatorial plane, starting
/// at angle `phase` (rad) from +x at t = 0. The acceleration is the
/// difference between the pull on the body and the pull on the Earth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LunarGravity {
    pub phase: f64,
    pub mu: f64,
    pub distance: f64,
}

impl LunarGravity {
    pub fn new(phase: f64) -> Self {
        Self {
            phase,
            mu: G * MOON_MASS,
            distance: MOON_DISTANCE,
        }
    }

    /// Mean motion of the Moon about the Earth (rad/s).
    pub fn mean_motion(&self) -> f64 {
        (G * (EARTH_MASS + MOON_MASS) / self.distance.powi(3)).sqrt()
    }

    pub fn period(&self) -> f64 {
        TAU / self.mean_motion()
    }

    /// Geocentric position of the Moon at `t` (km).
    pub fn moon_position(&self, t: f64) -> Vector3<f64> {
        let angle = self.phase + self.mean_motion() * t;
        Vector3::new(angle.cos(), angle.sin(), 0.0) * self.distance
    }
}

impl Default for LunarGravity {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Force for LunarGravity {
    fn name(&self) -> &str {
        "moon"
    }

    fn formula(&self) -> &str {
        r"GM_{L}\left(\frac{\vec{r}_{L} - \vec{r}}{\|\vec{r}_{L} - \vec{r}\|^3} - \frac{\vec{r}_{L}}{r_{L}^3}\right)"
    }

    fn acceleration(&self, state: &StateVector, t: f64) -> Vector3<f64> {
        let moon = self.moon_position(t);
        let relative = moon - position(state);
        self.mu * (relative / relative.magnitude().powi(3) - moon / moon.magnitude().powi(3))
    }
}
