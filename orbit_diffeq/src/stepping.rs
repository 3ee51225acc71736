use crate::DiffeqErrors;

// largest sample count a Vec<f64> can hold
const MAX_POINTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Fixed-step control configuration.
///
/// The step `dt` is used for every Runge-Kutta step of the run. The output
/// grid is the linear spacing of [`num_points`](Self::num_points) samples
/// over the span, so the final sample lands exactly on the stop time.
#[derive(Debug, Copy, Clone)]
pub struct FixedStepControl {
    /// Constant step size.
    pub dt: f64,
}

impl FixedStepControl {
    /// Constructs a new fixed-step controller with a given step size.
    pub fn new(dt: f64) -> Result<Self, DiffeqErrors> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(DiffeqErrors::InvalidStep(dt));
        }
        Ok(Self { dt })
    }

    /// Checks that the span is finite, strictly increasing and yields a grid
    /// small enough to allocate.
    pub fn validate(&self, tspan: (f64, f64)) -> Result<(), DiffeqErrors> {
        self.num_points(tspan).map(|_| ())
    }

    /// Number of samples of the output grid, `floor((stop - start) / dt) + 1`.
    pub fn num_points(&self, tspan: (f64, f64)) -> Result<usize, DiffeqErrors> {
        let (start, stop) = tspan;
        if !start.is_finite() || !stop.is_finite() || stop <= start {
            return Err(DiffeqErrors::InvalidTimeSpan { start, stop });
        }
        let span = stop - start;
        let steps = (span / self.dt).floor();
        // span may overflow to inf for finite bounds
        if steps >= MAX_POINTS as f64 {
            return Err(DiffeqErrors::TooManyPoints { span, dt: self.dt });
        }
        Ok(steps as usize + 1)
    }

    /// Evenly spaced sample times from `tspan.0` to `tspan.1` inclusive.
    pub fn grid(&self, tspan: (f64, f64)) -> Result<Vec<f64>, DiffeqErrors> {
        Ok(linspace(tspan.0, tspan.1, self.num_points(tspan)?))
    }
}

/// `n` evenly spaced values over `[start, stop]`, the last one exactly `stop`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = stop;
            values
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_hits_both_ends() {
        let control = FixedStepControl::new(2.0).unwrap();
        assert_eq!(control.num_points((0.0, 10.0)), Ok(6));
        assert_eq!(control.grid((0.0, 10.0)).unwrap(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn partial_step_is_dropped() {
        // 10.5 / 2 = 5.25 -> 6 points spread over the whole span
        let control = FixedStepControl::new(2.0).unwrap();
        let grid = control.grid((0.0, 10.5)).unwrap();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[5], 10.5);
        assert_eq!(grid[1], 2.1);
    }

    #[test]
    fn step_longer_than_span() {
        let control = FixedStepControl::new(20.0).unwrap();
        assert_eq!(control.grid((3.0, 10.0)).unwrap(), vec![3.0]);
    }

    #[test]
    fn linspace_with_offset() {
        assert_eq!(linspace(100.0, 101.0, 3), vec![100.0, 100.5, 101.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn rejects_bad_steps() {
        assert!(matches!(FixedStepControl::new(0.0), Err(DiffeqErrors::InvalidStep(_))));
        assert!(matches!(FixedStepControl::new(-1.0), Err(DiffeqErrors::InvalidStep(_))));
        assert!(FixedStepControl::new(f64::NAN).is_err());
        assert!(FixedStepControl::new(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_bad_spans() {
        let control = FixedStepControl::new(1.0).unwrap();
        assert!(control.validate((0.0, 10.0)).is_ok());
        assert!(matches!(
            control.validate((10.0, 10.0)),
            Err(DiffeqErrors::InvalidTimeSpan { .. })
        ));
        assert!(control.validate((10.0, 0.0)).is_err());
        assert!(control.validate((0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn rejects_unallocatable_grids() {
        let tiny = FixedStepControl::new(f64::MIN_POSITIVE).unwrap();
        assert!(matches!(
            tiny.validate((0.0, 1.0)),
            Err(DiffeqErrors::TooManyPoints { .. })
        ));
        assert!(tiny.grid((0.0, 1.0)).is_err());

        // finite bounds whose difference overflows
        let control = FixedStepControl::new(1.0).unwrap();
        assert!(matches!(
            control.num_points((-f64::MAX, f64::MAX)),
            Err(DiffeqErrors::TooManyPoints { .. })
        ));
    }
}
