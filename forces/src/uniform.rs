use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{Force, StateVector};

/// Constant acceleration, independent of state and time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniformAcceleration {
    pub name: String,
    pub value: Vector3<f64>,
}

impl UniformAcceleration {
    pub fn new(name: impl Into<String>, value: Vector3<f64>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Force for UniformAcceleration {
    fn name(&self) -> &str {
        &self.name
    }

    fn formula(&self) -> &str {
        r"\vec{a}_0"
    }

    fn acceleration(&self, _state: &StateVector, _t: f64) -> Vector3<f64> {
        self.value
    }
}
