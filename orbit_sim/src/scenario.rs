use std::{fs::File, path::Path};

use force_set::{ForceSet, ForceSetErrors};
use forces::{
    AtmosphericDrag, Force, ForceErrors, J2Gravity, LunarGravity, PointMassGravity,
    SolarRadiationPressure, StateVector, UniformAcceleration, constants::EARTH_RADIUS,
    drag::ExponentialAtmosphere, position, srp::ShadowModel,
};
use nalgebra::Vector3;
use orbit_diffeq::Trajectory;
use ron::error::SpannedError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioErrors {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON error: {0}")]
    Ron(#[from] SpannedError),
    #[error("ForceErrors: {0}")]
    Force(#[from] ForceErrors),
    #[error("ForceSetErrors: {0}")]
    ForceSet(#[from] ForceSetErrors),
}

/// One force of a scenario, as written in the RON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ForceConfig {
    Gravity,
    J2,
    Drag {
        cd: f64,
        area: f64,
        mass: f64,
        #[serde(default)]
        atmosphere: Option<ExponentialAtmosphere>,
    },
    Srp {
        cr: f64,
        area: f64,
        mass: f64,
        sun_direction: (f64, f64, f64),
        #[serde(default)]
        shadow: ShadowModel,
    },
    Moon {
        #[serde(default)]
        phase: f64,
    },
    Uniform {
        name: String,
        value: (f64, f64, f64),
    },
}

impl ForceConfig {
    pub fn build(&self) -> Result<Box<dyn Force>, ForceErrors> {
        let force: Box<dyn Force> = match self {
            ForceConfig::Gravity => Box::new(PointMassGravity::earth()),
            ForceConfig::J2 => Box::new(J2Gravity::earth()),
            ForceConfig::Drag {
                cd,
                area,
                mass,
                atmosphere,
            } => {
                let drag = AtmosphericDrag::new(*cd, *area, *mass)?;
                match atmosphere {
                    Some(atmosphere) => Box::new(drag.with_atmosphere(atmosphere.clone())),
                    None => Box::new(drag),
                }
            }
            ForceConfig::Srp {
                cr,
                area,
                mass,
                sun_direction: (x, y, z),
                shadow,
            } => Box::new(
                SolarRadiationPressure::new(*cr, *area, *mass, Vector3::new(*x, *y, *z))?
                    .with_shadow(*shadow),
            ),
            ForceConfig::Moon { phase } => Box::new(LunarGravity::new(*phase)),
            ForceConfig::Uniform {
                name,
                value: (x, y, z),
            } => Box::new(UniformAcceleration::new(name.clone(), Vector3::new(*x, *y, *z))),
        };
        Ok(force)
    }
}

/// A complete propagation run: forces, initial conditions and time span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub forces: Vec<ForceConfig>,
    /// `(x, y, z, vx, vy, vz)` in km and km/s.
    pub initial_state: (f64, f64, f64, f64, f64, f64),
    pub t_start: f64,
    pub t_stop: f64,
    pub t_step: f64,
    /// Stop once the altitude above the mean radius drops below this (km).
    #[serde(default)]
    pub min_altitude: Option<f64>,
}

impl Scenario {
    pub fn from_file(path: &Path) -> Result<Self, ScenarioErrors> {
        let file = File::open(path)?;
        Ok(ron::de::from_reader(file)?)
    }

    pub fn parse(s: &str) -> Result<Self, ScenarioErrors> {
        Ok(ron::from_str(s)?)
    }

    pub fn initial_state(&self) -> StateVector {
        let (x, y, z, vx, vy, vz) = self.initial_state;
        StateVector::new(x, y, z, vx, vy, vz)
    }

    pub fn force_set(&self) -> Result<ForceSet, ScenarioErrors> {
        let forces = self
            .forces
            .iter()
            .map(ForceConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ForceSet::new(forces)?)
    }

    pub fn run(&self, set: &ForceSet) -> Result<Trajectory<StateVector>, ScenarioErrors> {
        let x0 = self.initial_state();
        let result = match self.min_altitude {
            Some(min_altitude) => {
                let below = move |state: &StateVector| {
                    position(state).magnitude() - EARTH_RADIUS < min_altitude
                };
                set.solve(self.t_start, self.t_stop, self.t_step, &x0, Some(&below))?
            }
            None => set.solve(self.t_start, self.t_stop, self.t_step, &x0, None)?,
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_diffeq::Integrable;

    const ISS: &str = r#"
        Scenario(
            forces: [
                Gravity,
                J2,
                Drag(cd: 2.2, area: 1600.0, mass: 420000.0),
                Srp(cr: 1.3, area: 2500.0, mass: 420000.0, sun_direction: (1.0, 0.0, 0.0)),
                Moon(phase: 0.3),
                Uniform(name: "thrust", value: (0.0, 1e-9, 0.0)),
            ],
            initial_state: (6778.0, 0.0, 0.0, 0.0, 5.4, 5.4),
            t_start: 0.0,
            t_stop: 600.0,
            t_step: 10.0,
        )
    "#;

    #[test]
    fn parse_iss() {
        let scenario = Scenario::parse(ISS).unwrap();
        assert_eq!(scenario.forces.len(), 6);
        assert_eq!(scenario.min_altitude, None);
        assert_eq!(
            scenario.initial_state(),
            StateVector::new(6778.0, 0.0, 0.0, 0.0, 5.4, 5.4)
        );
        assert!(matches!(
            scenario.forces[3],
            ForceConfig::Srp {
                shadow: ShadowModel::Cylindrical,
                ..
            }
        ));

        let set = scenario.force_set().unwrap();
        assert_eq!(
            set.to_string(),
            "ForceSet[gravity, J2, drag, SRP, moon, thrust]"
        );
    }

    #[test]
    fn run_iss() {
        let scenario = Scenario::parse(ISS).unwrap();
        let set = scenario.force_set().unwrap();
        let result = scenario.run(&set).unwrap();
        assert_eq!(result.len(), 61);
        assert!(!result.is_interrupted());
        assert!(result.y.iter().all(|y| !y.has_nan()));
    }

    #[test]
    fn decaying_orbit_is_interrupted() {
        let scenario = Scenario {
            forces: vec![ForceConfig::Gravity],
            // starts at 150 km, falls straight down
            initial_state: (EARTH_RADIUS + 150.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            t_start: 0.0,
            t_stop: 600.0,
            t_step: 1.0,
            min_altitude: Some(120.0),
        };
        let set = scenario.force_set().unwrap();
        let result = scenario.run(&set).unwrap();

        let interruption = result.interruption.unwrap();
        let (_, last) = result.last_valid().unwrap();
        assert!(position(last).magnitude() - EARTH_RADIUS < 120.0);
        assert!(result.y[interruption.index - 1][0] - EARTH_RADIUS >= 120.0);
        assert!(result.y[interruption.index + 1].has_nan());
        assert_eq!(result.t[600], 600.0);
    }

    #[test]
    fn duplicate_forces_rejected() {
        let scenario = Scenario::parse(
            "Scenario(forces: [Gravity, Gravity], initial_state: (7000.0, 0.0, 0.0, 0.0, 7.5, 0.0), t_start: 0.0, t_stop: 10.0, t_step: 1.0)",
        )
        .unwrap();
        assert!(matches!(
            scenario.force_set(),
            Err(ScenarioErrors::ForceSet(ForceSetErrors::DuplicateName(_)))
        ));
    }

    #[test]
    fn invalid_force_parameters() {
        let config = ForceConfig::Drag {
            cd: 2.2,
            area: 1600.0,
            mass: -1.0,
            atmosphere: None,
        };
        assert!(config.build().is_err());
    }

    #[test]
    fn invalid_atmosphere_rejected_at_parse() {
        let text = "Scenario(
            forces: [Drag(cd: 2.2, area: 1600.0, mass: 1.0, atmosphere: Some((
                reference_altitude: 400.0, reference_density: 1e-12, scale_height: 0.0, ceiling: 1000.0,
            )))],
            initial_state: (6778.0, 0.0, 0.0, 0.0, 7.6, 0.0),
            t_start: 0.0,
            t_stop: 10.0,
            t_step: 1.0,
        )";
        assert!(matches!(Scenario::parse(text), Err(ScenarioErrors::Ron(_))));
    }

    #[test]
    fn malformed_file() {
        assert!(matches!(
            Scenario::parse("Scenario(forces: [Gravity]"),
            Err(ScenarioErrors::Ron(_))
        ));
    }

    #[test]
    fn bundled_scenarios_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");
        for name in ["iss.ron", "reentry.ron"] {
            let scenario = Scenario::from_file(&dir.join(name)).unwrap();
            assert!(scenario.force_set().is_ok(), "{name}");
        }
    }
}
