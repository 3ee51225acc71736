use std::array;

use tracing::warn;

use crate::{
    DiffeqErrors, OdeModel,
    result::Trajectory,
    state::Integrable,
    stepping::FixedStepControl,
    tableau::ButcherTableau,
};

// preallocated buffers for intermediate calculations
struct RKBuffers<State: Integrable, const STAGES: usize> {
    k: [State; STAGES],
    state: State,
    derivative: State,
}

impl<State: Integrable, const STAGES: usize> RKBuffers<State, STAGES> {
    fn new(x0: &State) -> Self {
        Self {
            k: array::from_fn(|_| x0.clone()),
            state: x0.clone(),
            derivative: x0.clone(),
        }
    }
}

/// Explicit Runge-Kutta integrator driven by a Butcher tableau.
#[derive(Debug, Clone, Copy)]
pub struct RungeKutta<const STAGES: usize> {
    tableau: ButcherTableau<STAGES>,
}

impl RungeKutta<4> {
    /// Classic fourth order method.
    pub fn rk4() -> Self {
        Self::new(ButcherTableau::<4>::RK4)
    }
}

impl<const STAGES: usize> RungeKutta<STAGES> {
    pub fn new(tableau: ButcherTableau<STAGES>) -> Self {
        Self { tableau }
    }

    /// Integrates `model` from `x0` over `tspan` with a constant step.
    ///
    /// After every step the new state is passed to `interrupt`. When it
    /// returns true the run stops: the tripping state is kept, every later
    /// state is set to NaN and the time grid is returned untouched.
    pub fn solve_fixed<Model: OdeModel>(
        &self,
        model: &Model,
        x0: &Model::State,
        tspan: (f64, f64),
        control: &FixedStepControl,
        interrupt: Option<&dyn Fn(&Model::State) -> bool>,
    ) -> Result<Trajectory<Model::State>, DiffeqErrors> {
        let dt = control.dt;
        let mut result = Trajectory::new(control.grid(tspan)?, x0);
        let mut buffers = RKBuffers::<Model::State, STAGES>::new(x0);

        for i in 0..result.len() - 1 {
            let (done, next) = result.y.split_at_mut(i + 1);
            self.step(model, result.t[i], dt, &done[i], &mut next[0], &mut buffers);

            if let Some(interrupt) = interrupt {
                if interrupt(&next[0]) {
                    warn!(
                        t = result.t[i + 1],
                        index = i + 1,
                        "integration interrupted at t={}",
                        result.t[i + 1]
                    );
                    result.interrupt(i + 1);
                    break;
                }
            }
        }
        Ok(result)
    }

    /// One step of size `h` from `(t, x)`, written into `y`.
    fn step<Model: OdeModel>(
        &self,
        model: &Model,
        t: f64,
        h: f64,
        x: &Model::State,
        y: &mut Model::State,
        buffers: &mut RKBuffers<Model::State, STAGES>,
    ) {
        let RKBuffers {
            k,
            state,
            derivative,
        } = buffers;

        model.f(t, x, &mut k[0]);
        for s in 1..STAGES {
            // stage point x + h * sum(a[s][i] * k[i])
            state.clone_from(x);
            for (i, &a) in self.tableau.a[s][..s].iter().enumerate() {
                if a != 0.0 {
                    add_scaled(state, &k[i], a * h, derivative);
                }
            }
            model.f(t + self.tableau.c[s] * h, state, &mut k[s]);
        }

        y.clone_from(x);
        for (ks, &b) in k.iter().zip(&self.tableau.b) {
            add_scaled(y, ks, b * h, derivative);
        }
    }
}

// target += factor * source, with scratch as workspace
fn add_scaled<State: Integrable>(
    target: &mut State,
    source: &State,
    factor: f64,
    scratch: &mut State,
) {
    scratch.clone_from(source);
    *scratch *= factor;
    *target += &*scratch;
}
