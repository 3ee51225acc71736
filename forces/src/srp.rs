//! Solar radiation pressure with a fixed inertial Sun direction.
//!
//! Over the span of a low-orbit propagation the Sun direction barely moves,
//! so it is held constant. Eclipses use an optional cylindrical Earth shadow.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    Force, ForceErrors, StateVector, check_positive,
    constants::{EARTH_RADIUS, SOLAR_PRESSURE_1AU},
    position,
};

// N/m^2 * m^2 / kg = m/s^2 -> km/s^2
const M_TO_KM: f64 = 1e-3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadowModel {
    /// Always in sunlight.
    None,
    /// Earth casts a cylinder of radius `EARTH_RADIUS` away from the Sun.
    #[default]
    Cylindrical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SrpFields")]
pub struct SolarRadiationPressure {
    /// Reflectivity coefficient.
    pub cr: f64,
    /// Area facing the Sun (m^2).
    pub area: f64,
    /// Mass (kg).
    pub mass: f64,
    /// Unit vector from the Earth towards the Sun.
    sun_direction: Vector3<f64>,
    pub shadow: ShadowModel,
}

#[derive(Deserialize)]
struct SrpFields {
    cr: f64,
    area: f64,
    mass: f64,
    sun_direction: Vector3<f64>,
    #[serde(default)]
    shadow: ShadowModel,
}

impl TryFrom<SrpFields> for SolarRadiationPressure {
    type Error = ForceErrors;

    fn try_from(fields: SrpFields) -> Result<Self, Self::Error> {
        Ok(Self::new(fields.cr, fields.area, fields.mass, fields.sun_direction)?
            .with_shadow(fields.shadow))
    }
}

impl SolarRadiationPressure {
    pub fn new(
        cr: f64,
        area: f64,
        mass: f64,
        sun_direction: Vector3<f64>,
    ) -> Result<Self, ForceErrors> {
        let norm = sun_direction.magnitude();
        if norm == 0.0 || !norm.is_finite() {
            return Err(ForceErrors::ZeroSunDirection);
        }
        Ok(Self {
            cr: check_positive("reflectivity coefficient", cr)?,
            area: check_positive("area", area)?,
            mass: check_positive("mass", mass)?,
            sun_direction: sun_direction / norm,
            shadow: ShadowModel::default(),
        })
    }

    pub fn with_shadow(mut self, shadow: ShadowModel) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn sun_direction(&self) -> &Vector3<f64> {
        &self.sun_direction
    }

    /// 1 in sunlight, 0 in shadow.
    pub fn illumination(&self, r: &Vector3<f64>) -> f64 {
        match self.shadow {
            ShadowModel::None => 1.0,
            ShadowModel::Cylindrical => {
                let along = r.dot(&self.sun_direction);
                if along >= 0.0 {
                    return 1.0;
                }
                let across = (r - along * self.sun_direction).magnitude();
                if across > EARTH_RADIUS { 1.0 } else { 0.0 }
            }
        }
    }
}

impl Force for SolarRadiationPressure {
    fn name(&self) -> &str {
        "SRP"
    }

    fn formula(&self) -> &str {
        r"-P_\odot C_r \frac{A}{m} \hat{s}"
    }

    fn acceleration(&self, state: &StateVector, _t: f64) -> Vector3<f64> {
        let nu = self.illumination(&position(state));
        let magnitude = SOLAR_PRESSURE_1AU * self.cr * self.area / self.mass * M_TO_KM;
        -nu * magnitude * self.sun_direction
    }
}
