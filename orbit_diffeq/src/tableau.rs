/// Coefficients of an explicit Runge-Kutta method.
///
/// `a` is strictly lower triangular: stage `s` only reads stages `0..s`.
#[derive(Debug, Clone, Copy)]
pub struct ButcherTableau<const STAGES: usize> {
    pub a: [[f64; STAGES]; STAGES],
    pub b: [f64; STAGES],
    pub c: [f64; STAGES],
}

impl ButcherTableau<4> {
    /// Classic fourth order Runge-Kutta.
    pub const RK4: Self = Self {
        a: [
            [0.0; 4],
            [0.5, 0.0, 0.0, 0.0],
            [0.0, 0.5, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ],
        b: [1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
        c: [0.0, 0.5, 0.5, 1.0],
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rk4_is_consistent() {
        let t = ButcherTableau::<4>::RK4;
        assert_abs_diff_eq!(t.b.iter().sum::<f64>(), 1.0, epsilon = 1e-15);
        for s in 0..4 {
            assert_abs_diff_eq!(t.a[s].iter().sum::<f64>(), t.c[s], epsilon = 1e-15);
        }
    }
}
