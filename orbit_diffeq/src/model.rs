use std::fmt::Debug;

use crate::state::Integrable;

/// Trait for defining a dynamical system model that can be numerically integrated.
///
/// Types implementing this trait must define how to compute the derivative (or RHS function)
/// of the ODE at a given time and state. The model is borrowed immutably: evaluating the
/// derivative must not change it.
pub trait OdeModel: Debug {
    type State: Integrable;
    /// Compute the derivative at time `t` and state `state`, storing the result in `derivative`.
    fn f(&self, t: f64, state: &Self::State, derivative: &mut Self::State);
}
