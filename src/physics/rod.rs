use super::field::project;
use super::hysteresis::dmdt;
use crate::errors::HysteresisErrors;
use crate::models::RodParameters;
use log::debug;
use nalgebra as na;

#[derive(Debug, Clone, PartialEq)]
pub struct HysteresisRod {
    volume: f64,
    orientation: na::Vector3<f64>,
    params: RodParameters,
}

impl HysteresisRod {
    pub fn new(
        volume: f64,
        orientation: na::Vector3<f64>,
        params: RodParameters,
    ) -> Result<Self, HysteresisErrors> {
        if !(volume.is_finite() && volume > 0.0) {
            return Err(HysteresisErrors::InvalidVolume(volume));
        }
        if orientation.magnitude() == 0.0 {
            return Err(HysteresisErrors::ZeroOrientation);
        }

        debug!(
            "hysteresis rod: volume {} m^3, axis [{} {} {}]",
            volume, orientation.x, orientation.y, orientation.z
        );

        Ok(HysteresisRod {
            volume,
            orientation,
            params,
        })
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn orientation(&self) -> &na::Vector3<f64> {
        &self.orientation
    }

    pub fn params(&self) -> &RodParameters {
        &self.params
    }

    // [A*m^2]
    pub fn magnetic_moment(&self, m: f64) -> na::Vector3<f64> {
        m * self.volume * self.orientation
    }

    pub fn magnetization_derivative(
        &self,
        m: f64,
        b_body: &na::Vector3<f64>,
        omega_body: &na::Vector3<f64>,
    ) -> f64 {
        let sample = project(&self.orientation, b_body, omega_body);
        dmdt(&self.params, m, sample.h, sample.dh_dt)
    }

    pub fn magnetization_derivative_from_h(&self, m: f64, h: f64, dh_dt: f64) -> f64 {
        dmdt(&self.params, m, h, dh_dt)
    }
}
