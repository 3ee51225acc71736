use crate::state::Integrable;

/// Where and when an integration was stopped early by its interrupt predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interruption {
    /// Index of the sample whose state tripped the predicate.
    pub index: usize,
    /// Grid time of that sample.
    pub t: f64,
}

/// Output of a fixed-step run: parallel time and state sequences.
///
/// `t` always holds the full grid. When the run was interrupted at sample
/// `k`, states `0..=k` are computed and every state after `k` is all-NaN.
#[derive(Debug, Clone)]
pub struct Trajectory<State>
where
    State: Integrable,
{
    pub t: Vec<f64>,
    pub y: Vec<State>,
    pub interruption: Option<Interruption>,
}

impl<State: Integrable> Trajectory<State> {
    /// Trajectory of `t.len()` samples, every state initialized to `x0`.
    pub(crate) fn new(t: Vec<f64>, x0: &State) -> Self {
        let y = vec![x0.clone(); t.len()];
        Self {
            t,
            y,
            interruption: None,
        }
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn is_interrupted(&self) -> bool {
        self.interruption.is_some()
    }

    /// Samples holding computed states, NaN tail excluded.
    pub fn valid_len(&self) -> usize {
        match self.interruption {
            Some(interruption) => interruption.index + 1,
            None => self.len(),
        }
    }

    /// Last computed sample.
    pub fn last_valid(&self) -> Option<(f64, &State)> {
        let n = self.valid_len();
        if n == 0 {
            return None;
        }
        Some((self.t[n - 1], &self.y[n - 1]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &State)> {
        self.t.iter().copied().zip(self.y.iter())
    }

    /// Replaces every state after `index` by NaN and records the interruption.
    pub(crate) fn interrupt(&mut self, index: usize) {
        for state in self.y.iter_mut().skip(index + 1) {
            state.fill_nan();
        }
        self.interruption = Some(Interruption {
            index,
            t: self.t[index],
        });
    }
}
