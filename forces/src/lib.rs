use std::fmt::Debug;

use nalgebra::{Vector3, Vector6};
use thiserror::Error;

pub mod constants;
pub mod drag;
pub mod j2;
pub mod lunar;
pub mod newtonian;
pub mod srp;
pub mod uniform;

pub use drag::{AtmosphericDrag, ExponentialAtmosphere};
pub use j2::J2Gravity;
pub use lunar::LunarGravity;
pub use newtonian::PointMassGravity;
pub use srp::SolarRadiationPressure;
pub use uniform::UniformAcceleration;

/// Cartesian state `[x, y, z, vx, vy, vz]` in km and km/s, inertial frame.
pub type StateVector = Vector6<f64>;

#[derive(Debug, Error)]
pub enum ForceErrors {
    #[error("{0} must be strictly positive, got {1}")]
    NonPositive(&'static str, f64),
    #[error("sun direction must be a non-zero vector")]
    ZeroSunDirection,
}

/// A single physical effect acting on the orbiting body.
///
/// Implementors are immutable once constructed: every parameter is fixed at
/// construction and `acceleration` is a pure function of its arguments.
pub trait Force: Debug + Send + Sync {
    /// Identifier of the force, unique within a force set.
    fn name(&self) -> &str;

    /// LaTeX expression of the force law, for display only.
    fn formula(&self) -> &str;

    /// Acceleration contribution (km/s^2) at `state` and time `t` (s).
    fn acceleration(&self, state: &StateVector, t: f64) -> Vector3<f64>;

    /// Euclidean norm of the acceleration at `state` and time `t`.
    fn acc_norm(&self, state: &StateVector, t: f64) -> f64 {
        self.acceleration(state, t).norm()
    }

    fn latex(&self) -> String {
        format!(r"{} : $\displaystyle {}$", self.name(), self.formula())
    }
}

/// Position part of a state vector.
pub fn position(state: &StateVector) -> Vector3<f64> {
    Vector3::new(state[0], state[1], state[2])
}

/// Velocity part of a state vector.
pub fn velocity(state: &StateVector) -> Vector3<f64> {
    Vector3::new(state[3], state[4], state[5])
}

pub(crate) fn check_positive(label: &'static str, value: f64) -> Result<f64, ForceErrors> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ForceErrors::NonPositive(label, value))
    }
}
