use crate::errors::HysteresisErrors;
use crate::models::RodParameters;
use csv::ReaderBuilder;
use log::debug;
use nalgebra as na;
use std::path::Path;

/// Rod layout of a damper: shared volume and material, one axis per rod.
#[derive(Debug, Clone, PartialEq)]
pub struct RodAssemblyConfig {
    pub volume: f64, // [m^3]
    pub orientations: Vec<[f64; 3]>,
    pub params: RodParameters,
}

/// The rod used to cross-check the J-A model against the reference outputs.
pub struct FixtureRod;

impl FixtureRod {
    pub const VOLUME: f64 = 0.1; // m^3

    pub const PARAMETERS: RodParameters = RodParameters {
        ms: 1.4e5,
        a: 2.0e3,
        k: 1.0e3,
        c: 0.2,
        alpha: 1.0e-3,
    };

    pub fn parameters() -> RodParameters {
        Self::PARAMETERS
    }

    pub fn orientation() -> na::Vector3<f64> {
        na::Vector3::new(1.0, 0.0, 0.0)
    }
}

/// Passive damper of a 10 cm CubeSat: one rod pair along X, one along Y.
pub struct CubeSatRods;

impl CubeSatRods {
    pub const ROD_RADIUS: f64 = 0.005; // meters
    pub const ROD_LENGTH: f64 = 0.1; // meters

    pub fn volume() -> f64 {
        Self::ROD_RADIUS * Self::ROD_RADIUS * std::f64::consts::PI * Self::ROD_LENGTH
    }

    pub fn orientations() -> Vec<[f64; 3]> {
        vec![
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
        ]
    }

    pub fn config() -> RodAssemblyConfig {
        RodAssemblyConfig {
            volume: Self::volume(),
            orientations: Self::orientations(),
            params: FixtureRod::PARAMETERS,
        }
    }
}

/// Reads J-A parameters from the first row of a CSV file with header
/// `ms,a,k,c,alpha` and validates them.
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<RodParameters, HysteresisErrors> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let params: RodParameters = match reader.deserialize::<RodParameters>().next() {
        Some(record) => record?,
        None => return Err(HysteresisErrors::MissingParameters),
    };
    params.validate()?;

    debug!("loaded J-A parameters from {:?}", path.as_ref());
    Ok(params)
}
