use crate::errors::HysteresisErrors;
use log::debug;
use serde::Deserialize;

/// Jiles-Atherton material parameters of one hysteresis rod.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RodParameters {
    pub ms: f64,    // Saturation magnetization [A/m]
    pub a: f64,     // Anhysteretic shape parameter [A/m]
    pub k: f64,     // Pinning (coercivity) parameter [A/m]
    pub c: f64,     // Reversibility coefficient [0-1]
    pub alpha: f64, // Inter-domain coupling
}

impl RodParameters {
    /// Builds a checked parameter set. Struct literals skip these checks, which
    /// is what verification fixtures rely on.
    pub fn new(ms: f64, a: f64, k: f64, c: f64, alpha: f64) -> Result<Self, HysteresisErrors> {
        let params = RodParameters { ms, a, k, c, alpha };
        params.validate()?;
        debug!("validated J-A parameters {:?}", params);
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), HysteresisErrors> {
        let positive = [("ms", self.ms), ("a", self.a), ("k", self.k)];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(HysteresisErrors::InvalidParameter { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.c) {
            return Err(HysteresisErrors::InvalidParameter {
                name: "c",
                value: self.c,
            });
        }

        if !self.alpha.is_finite() {
            return Err(HysteresisErrors::InvalidParameter {
                name: "alpha",
                value: self.alpha,
            });
        }

        Ok(())
    }

    pub fn debug_print(&self) {
        debug!("--  J-A parameters  --");
        debug!("  saturation magnetization ms: {} A/m", self.ms);
        debug!("  anhysteretic shape a:        {} A/m", self.a);
        debug!("  pinning k:                   {} A/m", self.k);
        debug!("  reversibility c:             {}", self.c);
        debug!("  coupling alpha:              {}", self.alpha);
    }
}

/// Magnetization of a rod along its axis [A/m]. Owned by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RodState {
    pub m: f64,
}

impl RodState {
    pub fn new(m: f64) -> Self {
        RodState { m }
    }
}

/// Field intensity along a rod axis and its rate of change.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldSample {
    pub h: f64,     // [A/m]
    pub dh_dt: f64, // [A/m/s]
}

impl FieldSample {
    pub fn new(h: f64, dh_dt: f64) -> Self {
        FieldSample { h, dh_dt }
    }
}
