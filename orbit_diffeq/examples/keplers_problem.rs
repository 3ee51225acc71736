use std::time::Instant;

use nalgebra::Vector6;
use orbit_diffeq::{FixedStepControl, OdeModel, RungeKutta};

#[derive(Debug)]
struct KeplerianOrbit {
    mu: f64,
}

impl OdeModel for KeplerianOrbit {
    type State = Vector6<f64>;

    fn f(&self, _t: f64, y: &Vector6<f64>, dy: &mut Vector6<f64>) {
        let r = [y[0], y[1], y[2]];
        let rmag = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
        let rmag_cubed = rmag * rmag * rmag;

        dy[0] = y[3];
        dy[1] = y[4];
        dy[2] = y[5];
        dy[3] = -self.mu / rmag_cubed * r[0];
        dy[4] = -self.mu / rmag_cubed * r[1];
        dy[5] = -self.mu / rmag_cubed * r[2];
    }
}

fn main() {
    let model = KeplerianOrbit { mu: 398600.4418 };

    // circular orbit at 7000 km, one period
    let x0 = Vector6::new(7000.0, 0.0, 0.0, 0.0, 7.546053290107541, 0.0);
    let period = std::f64::consts::TAU * (7000.0f64.powi(3) / model.mu).sqrt();

    let control = FixedStepControl::new(period / 4096.0).unwrap();

    let start = Instant::now();
    let result = RungeKutta::rk4()
        .solve_fixed(&model, &x0, (0.0, period), &control, None)
        .unwrap();
    let stop = Instant::now();
    dbg!(stop.duration_since(start).as_secs_f64());

    if let Some((t, y)) = result.last_valid() {
        println!("{:10.6}     {:10.6} {:10.6} {:10.6}", t, y[0], y[1], y[2]);
    }
}
