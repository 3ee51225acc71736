//! Atmospheric drag on a body moving through a co-rotating atmosphere.
//!
//! a = -1/2 rho Cd (A / m) |v_rel| v_rel
//!
//! Density follows a single exponential layer anchored at a reference
//! altitude. Above the ceiling the atmosphere is treated as vacuum.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    Force, ForceErrors, StateVector, check_positive,
    constants::{EARTH_RADIUS, EARTH_ROTATION_RATE},
    position, velocity,
};

// kg/m^3 * m^2 -> kg/km^3 * km^2
const DENSITY_AREA_TO_KM: f64 = 1e3;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AtmosphereFields")]
pub struct ExponentialAtmosphere {
    /// Altitude of the reference density (km).
    pub reference_altitude: f64,
    /// Density at the reference altitude (kg/m^3).
    pub reference_density: f64,
    /// Scale height (km).
    pub scale_height: f64,
    /// Altitude above which density is zero (km).
    pub ceiling: f64,
}

impl Default for ExponentialAtmosphere {
    /// 400-450 km band of the standard exponential table.
    fn default() -> Self {
        Self {
            reference_altitude: 400.0,
            reference_density: 3.725e-12,
            scale_height: 58.515,
            ceiling: 1000.0,
        }
    }
}

#[derive(Deserialize)]
struct AtmosphereFields {
    reference_altitude: f64,
    reference_density: f64,
    scale_height: f64,
    ceiling: f64,
}

impl TryFrom<AtmosphereFields> for ExponentialAtmosphere {
    type Error = ForceErrors;

    fn try_from(fields: AtmosphereFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.reference_altitude,
            fields.reference_density,
            fields.scale_height,
            fields.ceiling,
        )
    }
}

impl ExponentialAtmosphere {
    pub fn new(
        reference_altitude: f64,
        reference_density: f64,
        scale_height: f64,
        ceiling: f64,
    ) -> Result<Self, ForceErrors> {
        Ok(Self {
            reference_altitude,
            reference_density: check_positive("reference density", reference_density)?,
            scale_height: check_positive("scale height", scale_height)?,
            ceiling,
        })
    }

    /// Density (kg/m^3) at `altitude` (km).
    pub fn density(&self, altitude: f64) -> f64 {
        if altitude > self.ceiling {
            return 0.0;
        }
        self.reference_density * (-(altitude - self.reference_altitude) / self.scale_height).exp()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DragFields")]
pub struct AtmosphericDrag {
    /// Drag coefficient.
    pub cd: f64,
    /// Cross-sectional area (m^2).
    pub area: f64,
    /// Mass (kg).
    pub mass: f64,
    pub atmosphere: ExponentialAtmosphere,
}

#[derive(Deserialize)]
struct DragFields {
    cd: f64,
    area: f64,
    mass: f64,
    #[serde(default)]
    atmosphere: ExponentialAtmosphere,
}

impl TryFrom<DragFields> for AtmosphericDrag {
    type Error = ForceErrors;

    fn try_from(fields: DragFields) -> Result<Self, Self::Error> {
        Ok(Self::new(fields.cd, fields.area, fields.mass)?.with_atmosphere(fields.atmosphere))
    }
}

impl AtmosphericDrag {
    pub fn new(cd: f64, area: f64, mass: f64) -> Result<Self, ForceErrors> {
        Ok(Self {
            cd: check_positive("drag coefficient", cd)?,
            area: check_positive("area", area)?,
            mass: check_positive("mass", mass)?,
            atmosphere: ExponentialAtmosphere::default(),
        })
    }

    pub fn with_atmosphere(mut self, atmosphere: ExponentialAtmosphere) -> Self {
        self.atmosphere = atmosphere;
        self
    }

    /// Velocity relative to the atmosphere rotating with the Earth about +z.
    pub fn relative_velocity(state: &StateVector) -> Vector3<f64> {
        let omega = Vector3::new(0.0, 0.0, EARTH_ROTATION_RATE);
        velocity(state) - omega.cross(&position(state))
    }
}

impl Force for AtmosphericDrag {
    fn name(&self) -> &str {
        "drag"
    }

    fn formula(&self) -> &str {
        r"-\frac{1}{2}\rho C_d \frac{A}{m} \|\vec{v}_{rel}\| \vec{v}_{rel}"
    }

    fn acceleration(&self, state: &StateVector, _t: f64) -> Vector3<f64> {
        let altitude = position(state).magnitude() - EARTH_RADIUS;
        let rho = self.atmosphere.density(altitude);
        if rho == 0.0 {
            return Vector3::zeros();
        }
        let v_rel = Self::relative_velocity(state);
        let ballistic = rho * self.cd * self.area / self.mass * DENSITY_AREA_TO_KM;
        -0.5 * ballistic * v_rel.magnitude() * v_rel
    }
}
