//! A set of forces acting together on one orbiting body.
//!
//! [`ForceSet`] sums the accelerations of its forces into the right-hand side
//! of the equations of motion and integrates them with a fixed-step RK4.

use std::{
    collections::{HashMap, HashSet},
    fmt::{Display, Formatter},
};

use forces::{Force, StateVector};
use nalgebra::Vector3;
use orbit_diffeq::{DiffeqErrors, FixedStepControl, OdeModel, RungeKutta, Trajectory};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum ForceSetErrors {
    #[error("DiffeqErrors: {0}")]
    DiffeqErrors(#[from] DiffeqErrors),
    #[error("force '{0}' appears more than once in the set")]
    DuplicateName(String),
}

/// Forces applied together to one body.
///
/// The set is fixed at construction. Names must be unique since they key the
/// diagnostics returned by [`magnitude`](Self::magnitude).
#[derive(Debug)]
pub struct ForceSet {
    forces: Vec<Box<dyn Force>>,
}

impl ForceSet {
    pub fn new(forces: Vec<Box<dyn Force>>) -> Result<Self, ForceSetErrors> {
        check_unique_names(&forces)?;
        let set = Self { forces };
        debug!("created {set}");
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.forces.iter().map(|force| force.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Force> {
        self.forces.iter().map(|force| force.as_ref())
    }

    /// Sum of every force's acceleration at `state` and `t`.
    pub fn total_acceleration(&self, state: &StateVector, t: f64) -> Vector3<f64> {
        self.forces
            .iter()
            .fold(Vector3::zeros(), |acc, force| acc + force.acceleration(state, t))
    }

    /// Time derivative of `state`: `[vx, vy, vz, ax, ay, az]`.
    pub fn derivee(&self, state: &StateVector, t: f64) -> StateVector {
        let a = self.total_acceleration(state, t);
        StateVector::new(state[3], state[4], state[5], a.x, a.y, a.z)
    }

    /// Order of magnitude, `log10` of the acceleration norm at t = 0, of each force.
    ///
    /// A force with no effect at `state` maps to negative infinity.
    pub fn magnitude(&self, state: &StateVector) -> HashMap<String, f64> {
        self.forces
            .iter()
            .map(|force| {
                let norm = force.acc_norm(state, 0.0);
                let order = if norm == 0.0 {
                    f64::NEG_INFINITY
                } else {
                    norm.log10()
                };
                (force.name().to_string(), order)
            })
            .collect()
    }

    /// Integrates the motion with RK4 from `t_start` to `t_stop`.
    ///
    /// The output grid holds `floor((t_stop - t_start) / t_step) + 1` evenly
    /// spaced times ending exactly on `t_stop`. When `interrupt` returns true
    /// for a new state the run stops there, every later state is NaN and
    /// [`Trajectory::interruption`] records the sample.
    pub fn solve(
        &self,
        t_start: f64,
        t_stop: f64,
        t_step: f64,
        initial_state: &StateVector,
        interrupt: Option<&dyn Fn(&StateVector) -> bool>,
    ) -> Result<Trajectory<StateVector>, ForceSetErrors> {
        let control = FixedStepControl::new(t_step)?;
        let result = RungeKutta::rk4().solve_fixed(
            self,
            initial_state,
            (t_start, t_stop),
            &control,
            interrupt,
        )?;
        Ok(result)
    }
}

fn check_unique_names(forces: &[Box<dyn Force>]) -> Result<(), ForceSetErrors> {
    let mut names = HashSet::new();
    for force in forces {
        if !names.insert(force.name()) {
            return Err(ForceSetErrors::DuplicateName(force.name().to_string()));
        }
    }
    Ok(())
}

impl OdeModel for ForceSet {
    type State = StateVector;

    fn f(&self, t: f64, state: &StateVector, derivative: &mut StateVector) {
        *derivative = self.derivee(state, t);
    }
}

impl Display for ForceSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ForceSet[{}]", self.names().join(", "))
    }
}
