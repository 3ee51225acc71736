//! Fixed-step Runge-Kutta integration of ODE models.
//!
//! A model implements [`OdeModel`] for a state implementing [`Integrable`].
//! [`RungeKutta::solve_fixed`] advances it over an evenly spaced time grid
//! and returns a [`Trajectory`], optionally cut short by an interrupt
//! predicate evaluated after every step.

use thiserror::Error;

/// Submodules for core ODE system components.
pub mod model;
pub mod result;
pub mod rk;
pub mod state;
pub mod stepping;
pub mod tableau;

pub use model::OdeModel;
pub use result::{Interruption, Trajectory};
pub use rk::RungeKutta;
pub use state::Integrable;
pub use stepping::FixedStepControl;
pub use tableau::ButcherTableau;

#[derive(Debug, Error, PartialEq)]
pub enum DiffeqErrors {
    #[error("time step must be finite and strictly positive, got {0}")]
    InvalidStep(f64),
    #[error("invalid time span: stop ({stop}) must be finite and greater than start ({start})")]
    InvalidTimeSpan { start: f64, stop: f64 },
    #[error("a step of {dt} over a span of {span} gives more samples than can be stored")]
    TooManyPoints { span: f64, dt: f64 },
}
