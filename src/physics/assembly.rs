use super::rod::HysteresisRod;
use crate::config::rod::RodAssemblyConfig;
use crate::errors::HysteresisErrors;
use log::{debug, warn};
use nalgebra as na;

const UNIT_TOLERANCE: f64 = 1e-9;

/// Per-rod magnetization rates and the torque the rods exert on the body.
#[derive(Debug, Clone, PartialEq)]
pub struct RodEffects {
    pub dm_dt: Vec<f64>,          // [A/m/s]
    pub torque: na::Vector3<f64>, // [N*m]
}

/// The damper as a whole: several rods sharing one material and volume.
#[derive(Debug, Clone)]
pub struct RodAssembly {
    rods: Vec<HysteresisRod>,
}

impl RodAssembly {
    pub fn new(rods: Vec<HysteresisRod>) -> Self {
        RodAssembly { rods }
    }

    pub fn from_config(config: &RodAssemblyConfig) -> Result<Self, HysteresisErrors> {
        config.params.validate()?;
        config.params.debug_print();

        let rods = config
            .orientations
            .iter()
            .map(|axis| {
                let axis = na::Vector3::from(*axis);
                if (axis.magnitude() - 1.0).abs() > UNIT_TOLERANCE {
                    warn!(
                        "rod axis [{} {} {}] is not unit length; using it unnormalized",
                        axis.x, axis.y, axis.z
                    );
                }
                HysteresisRod::new(config.volume, axis, config.params)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("built rod assembly with {} rods", rods.len());
        Ok(RodAssembly { rods })
    }

    pub fn rods(&self) -> &[HysteresisRod] {
        &self.rods
    }

    pub fn len(&self) -> usize {
        self.rods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rods.is_empty()
    }

    /// Evaluates every rod that has a magnetization entry. Extra rods or extra
    /// entries are ignored.
    pub fn rod_effects(
        &self,
        magnetizations: &[f64],
        b_body: &na::Vector3<f64>,
        omega_body: &na::Vector3<f64>,
    ) -> RodEffects {
        let mut dm_dt = Vec::with_capacity(self.rods.len().min(magnetizations.len()));
        let mut torque = na::Vector3::zeros();

        for (rod, &m) in self.rods.iter().zip(magnetizations) {
            dm_dt.push(rod.magnetization_derivative(m, b_body, omega_body));
            // tau = m_dipole x B
            torque += rod.magnetic_moment(m).cross(b_body);
        }

        RodEffects { dm_dt, torque }
    }

    /// Like `rod_effects`, but requires one magnetization per rod.
    pub fn try_rod_effects(
        &self,
        magnetizations: &[f64],
        b_body: &na::Vector3<f64>,
        omega_body: &na::Vector3<f64>,
    ) -> Result<RodEffects, HysteresisErrors> {
        if magnetizations.len() != self.rods.len() {
            return Err(HysteresisErrors::StateLengthMismatch {
                expected: self.rods.len(),
                found: magnetizations.len(),
            });
        }
        Ok(self.rod_effects(magnetizations, b_body, omega_body))
    }
}
