use std::{
    fmt::Debug,
    ops::{AddAssign, MulAssign},
};

use nalgebra::SVector;

/// Trait representing an integrable state for the fixed-step solvers.
///
/// The stages are accumulated in place, so a state only needs scaling by a
/// scalar and addition of another state. The derivative has the same type as
/// the state.
pub trait Integrable: Clone + Debug + MulAssign<f64> + for<'a> AddAssign<&'a Self> {
    /// Overwrites every component with NaN.
    fn fill_nan(&mut self);

    /// True if any component is NaN.
    fn has_nan(&self) -> bool;
}

impl<const N: usize> Integrable for SVector<f64, N> {
    fn fill_nan(&mut self) {
        self.fill(f64::NAN);
    }

    fn has_nan(&self) -> bool {
        self.iter().any(|x| x.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector6;

    #[test]
    fn nan_fill() {
        let mut x = Vector6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert!(!x.has_nan());
        x.fill_nan();
        assert!(x.iter().all(|v| v.is_nan()));
        assert!(x.has_nan());
    }

    #[test]
    fn in_place_ops() {
        let mut x = Vector6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let dx = Vector6::repeat(1.0);
        x *= 2.0;
        x += &dx;
        assert_eq!(x, Vector6::new(3.0, 5.0, 7.0, 9.0, 11.0, 13.0));
    }
}
